//! Error types for device list loading.

use std::path::PathBuf;

/// Result type alias for device list operations.
pub type Result<T> = std::result::Result<T, DeviceFileError>;

/// Errors that can occur while reading or parsing the device list.
#[derive(Debug, thiserror::Error)]
pub enum DeviceFileError {
    /// The device list does not exist.
    #[error("Cannot find badge devices file: {}", path.display())]
    NotFound { path: PathBuf },

    /// The path exists but is not a regular file.
    #[error("Badge devices path is not a regular file: {}", path.display())]
    NotAFile { path: PathBuf },

    /// A non-comment, non-blank line could not be turned into a device record.
    #[error("Malformed device line {line_number} ({line:?}): {reason}")]
    MalformedLine {
        line_number: usize,
        line: String,
        reason: String,
    },

    /// Reading the file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeviceFileError {
    /// Create a new malformed line error.
    pub fn malformed(line_number: usize, line: &str, reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            line_number,
            line: line.trim_end().to_string(),
            reason: reason.into(),
        }
    }

    /// Returns `true` for errors caused by a wrong device list location.
    ///
    /// These are startup configuration problems rather than content problems.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::NotAFile { .. })
    }
}
