//! Shared constants for the standalone badge registry.
//!
//! # Device list
//!
//! The device list lives in a configuration directory under a fixed file name.
//! Each non-comment line has the form:
//!
//! ```text
//! <mac> <badge_id> <project_id> [<device_name> ...]
//! ```
//!
//! ```
//! use badgehub_core::constants::*;
//!
//! assert_eq!(DEVICES_FILE_NAME, "devices.txt");
//! assert_eq!(DEFAULT_BACKFILL_WINDOW_SECS, 24 * 60 * 60);
//! ```

/// File name of the device list inside the configuration directory.
pub const DEVICES_FILE_NAME: &str = "devices.txt";

/// Default configuration directory, relative to the working directory.
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Marker that starts a comment line in the device list.
pub const COMMENT_PREFIX: char = '#';

/// Number of leading tokens every device line must carry (mac, badge id, project id).
pub const REQUIRED_DEVICE_TOKENS: usize = 3;

/// How far before startup the default reference timestamp is placed.
///
/// Badges without an explicit reference begin any historical data pull from
/// this many seconds before the registry was created.
pub const DEFAULT_BACKFILL_WINDOW_SECS: i64 = 24 * 60 * 60;

/// Milliseconds per second, the resolution of timestamp fractions.
pub const MILLIS_PER_SECOND: u16 = 1000;

/// Display format for reference timestamps in diagnostics.
pub const PRETTY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d@%H:%M UTC";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backfill_window_is_one_day() {
        assert_eq!(DEFAULT_BACKFILL_WINDOW_SECS, 86_400);
    }

    #[test]
    fn test_required_tokens() {
        assert_eq!(REQUIRED_DEVICE_TOKENS, 3);
    }
}
