//! Device list parser.
//!
//! Converts the text of a device list into [`DeviceRecord`] values.
//!
//! # Line Format
//!
//! ```text
//! <mac> <badge_id> <project_id> [<device_name> ...]
//! ```
//!
//! - Leading whitespace is stripped before anything else.
//! - Lines that are then empty, or start with `#`, are skipped.
//! - Tokens are separated by any run of whitespace.
//! - The first three tokens are positional. Anything after them is kept as
//!   the device name and never validated.
//!
//! # Malformed Lines
//!
//! A line with fewer than three tokens, or whose badge id or project id is
//! not an integer, fails the whole parse with
//! [`DeviceFileError::MalformedLine`]. Parsing stops at the first such line.
//!
//! # Examples
//!
//! ```
//! use badgehub_devices::parser::DeviceListParser;
//!
//! let text = "# comment\n\n  \nAA:BB:CC:DD:EE:FF 7 2 deviceA\n";
//! let records = DeviceListParser::parse(text).unwrap();
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].mac.as_str(), "AA:BB:CC:DD:EE:FF");
//! assert_eq!(records[0].badge_id.value(), 7);
//! assert_eq!(records[0].project_id.value(), 2);
//! ```
//!
//! ```
//! use badgehub_devices::parser::DeviceListParser;
//!
//! // Missing project id
//! assert!(DeviceListParser::parse("AA:BB:CC:DD:EE:FF 7\n").is_err());
//! ```

use crate::error::{DeviceFileError, Result};
use crate::record::DeviceRecord;
use badgehub_core::constants::{COMMENT_PREFIX, REQUIRED_DEVICE_TOKENS};
use badgehub_core::{BadgeId, BadgeMac, ProjectId};

/// Parser for device list text.
pub struct DeviceListParser;

impl DeviceListParser {
    /// Parse a complete device list.
    ///
    /// Returns records in file order.
    ///
    /// # Errors
    ///
    /// Returns `DeviceFileError::MalformedLine` for the first line that is
    /// neither skippable nor a valid device entry.
    pub fn parse(text: &str) -> Result<Vec<DeviceRecord>> {
        let mut records = Vec::new();
        for (index, line) in text.lines().enumerate() {
            if let Some(record) = Self::parse_line(index + 1, line)? {
                records.push(record);
            }
        }
        Ok(records)
    }

    /// Returns `true` if the line carries no device entry.
    #[must_use]
    pub fn is_skippable(line: &str) -> bool {
        let stripped = line.trim_start();
        stripped.is_empty() || stripped.starts_with(COMMENT_PREFIX)
    }

    /// Parse a single line.
    ///
    /// Returns `Ok(None)` for blank and comment lines.
    ///
    /// # Arguments
    ///
    /// * `line_number` - 1-based position of the line, recorded on the result
    /// * `line` - raw line text, with or without its terminator
    ///
    /// # Errors
    ///
    /// Returns `DeviceFileError::MalformedLine` if fewer than three tokens are
    /// present or an identifier is not an integer.
    pub fn parse_line(line_number: usize, line: &str) -> Result<Option<DeviceRecord>> {
        if Self::is_skippable(line) {
            return Ok(None);
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < REQUIRED_DEVICE_TOKENS {
            return Err(DeviceFileError::malformed(
                line_number,
                line,
                format!(
                    "expected at least {REQUIRED_DEVICE_TOKENS} tokens (mac, badge id, project id), found {}",
                    tokens.len()
                ),
            ));
        }

        let malformed =
            |e: badgehub_core::Error| DeviceFileError::malformed(line_number, line, e.to_string());

        let mac = BadgeMac::new(tokens[0]).map_err(malformed)?;
        let badge_id: BadgeId = tokens[1].parse().map_err(malformed)?;
        let project_id: ProjectId = tokens[2].parse().map_err(malformed)?;

        let mut record = DeviceRecord::new(mac, badge_id, project_id, line_number);
        if tokens.len() > REQUIRED_DEVICE_TOKENS {
            record = record.with_name(tokens[REQUIRED_DEVICE_TOKENS..].join(" "));
        }

        Ok(Some(record))
    }
}
