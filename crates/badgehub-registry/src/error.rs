//! Error types for registry operations.

use badgehub_devices::DeviceFileError;

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors that can occur while populating or reading the badge registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The badge list was requested before it was ever populated.
    #[error("Badges list has not been initialized yet")]
    NotInitialized,

    /// Loading the device list failed.
    #[error(transparent)]
    DeviceFile(#[from] DeviceFileError),
}

impl RegistryError {
    /// Returns `true` if the error comes from a missing or unusable device list path.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        match self {
            Self::DeviceFile(e) => e.is_configuration(),
            Self::NotInitialized => false,
        }
    }
}
