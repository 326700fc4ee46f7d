//! Lazily populated badge registry.
//!
//! The registry has two states. It starts `Uninitialized` and becomes
//! `Populated` on the first successful [`BadgeRegistry::ensure_populated`]
//! call. It is never refreshed: later calls return the cached collection
//! without touching the device list again.
//!
//! ```text
//!   new() ──► Uninitialized ──ensure_populated() ok──► Populated
//!                  │   ▲                                   │
//!                  └───┘ load error                        └─ ensure_populated(): no-op
//! ```

use crate::collection::BadgeCollection;
use crate::error::{RegistryError, Result};
use crate::reference::ReferenceTimestamp;
use badgehub_devices::DeviceFileLoader;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug)]
enum RegistryState {
    Uninitialized,
    Populated(BadgeCollection),
}

/// Badge registry backed by a device list on disk.
///
/// # Examples
///
/// ```no_run
/// use badgehub_registry::{BadgeRegistry, ReferenceTimestamp};
///
/// # fn example() -> badgehub_registry::Result<()> {
/// let mut registry = BadgeRegistry::new(
///     "config/devices.txt",
///     ReferenceTimestamp::explicit(1_520_270_000),
/// );
///
/// assert!(registry.get().is_err());
///
/// let badges = registry.ensure_populated()?;
/// println!("{} badges", badges.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct BadgeRegistry {
    loader: DeviceFileLoader,
    reference: ReferenceTimestamp,
    state: RegistryState,
}

impl BadgeRegistry {
    /// Create an unpopulated registry for the given device list.
    pub fn new(devices_path: impl Into<PathBuf>, reference: ReferenceTimestamp) -> Self {
        Self {
            loader: DeviceFileLoader::new(devices_path),
            reference,
            state: RegistryState::Uninitialized,
        }
    }

    /// Load the device list and build the collection, unless already done.
    ///
    /// A failed load leaves the registry uninitialized, so a later call
    /// retries the load.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DeviceFile` if the device list is missing,
    /// unreadable or malformed.
    pub fn ensure_populated(&mut self) -> Result<&BadgeCollection> {
        if matches!(self.state, RegistryState::Uninitialized) {
            let records = self.loader.load()?;
            let collection = BadgeCollection::from_records(records, &self.reference);
            info!(
                "Registered {} badge(s) from {}",
                collection.len(),
                self.loader.path().display()
            );
            self.state = RegistryState::Populated(collection);
        } else {
            debug!("Badge registry already populated, skipping reload");
        }
        self.get()
    }

    /// The cached collection.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotInitialized` if the registry was never populated.
    pub fn get(&self) -> Result<&BadgeCollection> {
        match &self.state {
            RegistryState::Populated(collection) => Ok(collection),
            RegistryState::Uninitialized => Err(RegistryError::NotInitialized),
        }
    }

    pub fn is_populated(&self) -> bool {
        matches!(self.state, RegistryState::Populated(_))
    }

    pub fn reference(&self) -> &ReferenceTimestamp {
        &self.reference
    }

    pub fn devices_path(&self) -> &Path {
        self.loader.path()
    }
}
