use badgehub_core::constants::{DEFAULT_BACKFILL_WINDOW_SECS, DEFAULT_CONFIG_DIR, DEVICES_FILE_NAME};
use std::path::PathBuf;

/// Configuration for a standalone badge manager.
///
/// # Example
///
/// ```
/// use badgehub_registry::ManagerConfig;
/// use std::path::Path;
///
/// let config = ManagerConfig::new("/etc/badgehub")
///     .reference_timestamp(1_520_270_000);
///
/// assert_eq!(config.devices_path(), Path::new("/etc/badgehub/devices.txt"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Directory holding the device list
    pub config_dir: PathBuf,

    /// File name of the device list inside `config_dir`
    pub devices_file_name: String,

    /// Explicit reference timestamp (epoch seconds); `None` selects the backfill policy
    pub reference_timestamp: Option<i64>,

    /// Seconds subtracted from the startup time when no reference timestamp is given
    pub backfill_window_secs: i64,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            devices_file_name: DEVICES_FILE_NAME.to_string(),
            reference_timestamp: None,
            backfill_window_secs: DEFAULT_BACKFILL_WINDOW_SECS,
        }
    }
}

impl ManagerConfig {
    /// Create a configuration reading `devices.txt` from the given directory
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            ..Default::default()
        }
    }

    /// Set an explicit reference timestamp
    pub fn reference_timestamp(mut self, seconds: i64) -> Self {
        self.reference_timestamp = Some(seconds);
        self
    }

    /// Set the backfill window used when no reference timestamp is given
    pub fn backfill_window_secs(mut self, secs: i64) -> Self {
        self.backfill_window_secs = secs;
        self
    }

    /// Use a different device list file name
    pub fn devices_file_name(mut self, name: impl Into<String>) -> Self {
        self.devices_file_name = name.into();
        self
    }

    /// Full path of the device list
    pub fn devices_path(&self) -> PathBuf {
        self.config_dir.join(&self.devices_file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_config() {
        let config = ManagerConfig::default();
        assert_eq!(config.config_dir, PathBuf::from("config"));
        assert_eq!(config.devices_path(), Path::new("config/devices.txt"));
        assert_eq!(config.reference_timestamp, None);
        assert_eq!(config.backfill_window_secs, 86_400);
    }

    #[test]
    fn test_builder() {
        let config = ManagerConfig::new("/srv/hub")
            .reference_timestamp(1_520_270_000)
            .backfill_window_secs(300)
            .devices_file_name("lab-devices.txt");

        assert_eq!(config.reference_timestamp, Some(1_520_270_000));
        assert_eq!(config.backfill_window_secs, 300);
        assert_eq!(config.devices_path(), Path::new("/srv/hub/lab-devices.txt"));
    }
}
