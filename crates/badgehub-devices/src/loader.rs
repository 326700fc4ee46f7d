//! Device list file loader.
//!
//! [`DeviceFileLoader`] checks that the configured path points at a regular
//! file, reads it in one pass and hands each line to
//! [`DeviceListParser`](crate::parser::DeviceListParser). The file handle
//! lives only for the duration of [`DeviceFileLoader::load`].
//!
//! # Examples
//!
//! ```no_run
//! use badgehub_devices::DeviceFileLoader;
//!
//! # fn example() -> badgehub_devices::Result<()> {
//! let loader = DeviceFileLoader::new("config/devices.txt");
//! for record in loader.load()? {
//!     println!("{record}");
//! }
//! # Ok(())
//! # }
//! ```

use crate::error::{DeviceFileError, Result};
use crate::parser::DeviceListParser;
use crate::record::DeviceRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Reads device records from a device list on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceFileLoader {
    path: PathBuf,
}

impl DeviceFileLoader {
    /// Create a loader for the given device list path.
    ///
    /// The path is not checked until [`load`](Self::load) is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the device list.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole device list.
    ///
    /// # Errors
    ///
    /// - `DeviceFileError::NotFound` if nothing exists at the path
    /// - `DeviceFileError::NotAFile` if the path is a directory or other non-file
    /// - `DeviceFileError::MalformedLine` for the first invalid device line
    /// - `DeviceFileError::Io` if reading fails part-way (including invalid UTF-8)
    pub fn load(&self) -> Result<Vec<DeviceRecord>> {
        self.check_path()?;
        info!("Reading badges from file: {}", self.path.display());

        let reader = BufReader::new(File::open(&self.path)?);
        let mut records = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some(record) = DeviceListParser::parse_line(index + 1, &line)? {
                records.push(record);
            }
        }

        for record in &records {
            debug!("    {}", record);
        }
        debug!(
            "Loaded {} device(s) from {}",
            records.len(),
            self.path.display()
        );

        Ok(records)
    }

    fn check_path(&self) -> Result<()> {
        match std::fs::metadata(&self.path) {
            Ok(meta) if meta.is_file() => Ok(()),
            Ok(_) => {
                error!(
                    "Badge devices path is not a regular file: {}",
                    self.path.display()
                );
                Err(DeviceFileError::NotAFile {
                    path: self.path.clone(),
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                error!("Cannot find badge devices file: {}", self.path.display());
                Err(DeviceFileError::NotFound {
                    path: self.path.clone(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }
}
