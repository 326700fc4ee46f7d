//! Badge manager interface and its standalone implementation.
//!
//! [`BadgeManager`] is the accessor surface shared with the server-synchronized
//! variant of the hub. [`StandaloneBadgeManager`] implements it from a local
//! device list only: badge list pulls read the file once, and the
//! server-facing operations answer with a [`SyncOutcome`] instead of
//! contacting anything.
//!
//! # Examples
//!
//! ```no_run
//! use badgehub_registry::{BadgeManager, ManagerConfig, StandaloneBadgeManager};
//!
//! # fn example() -> badgehub_registry::Result<()> {
//! let config = ManagerConfig::new("config").reference_timestamp(1_520_270_000);
//! let mut manager = StandaloneBadgeManager::new(config);
//!
//! manager.pull_badges_list()?;
//! for badge in manager.badges()? {
//!     println!("{} -> {}", badge.mac(), badge.badge_id());
//! }
//!
//! // Nothing to push to in standalone mode
//! assert!(manager.send_badge("e0:5b:1c:73:9b:01").is_unsupported());
//! # Ok(())
//! # }
//! ```

use crate::collection::BadgeCollection;
use crate::config::ManagerConfig;
use crate::error::Result;
use crate::reference::ReferenceTimestamp;
use crate::registry::BadgeRegistry;
use std::fmt;
use tracing::debug;

/// Outcome of a server-facing badge operation.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The operation finished.
    Completed,

    /// The operation does not exist in this variant.
    Unsupported {
        /// Name of the operation that was requested.
        operation: &'static str,
    },
}

impl SyncOutcome {
    /// Returns `true` if the operation finished.
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns `true` if the operation is not available.
    pub fn is_unsupported(self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

impl fmt::Display for SyncOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => write!(f, "completed"),
            Self::Unsupported { operation } => {
                write!(f, "'{operation}' is unsupported in standalone mode")
            }
        }
    }
}

/// Badge list access shared by all hub variants.
pub trait BadgeManager {
    /// Populate the badge list if it has not been populated yet.
    ///
    /// # Errors
    /// Returns an error if the badge source cannot be read.
    fn pull_badges_list(&mut self) -> Result<()>;

    /// Refresh a single badge from the server.
    fn pull_badge(&mut self, mac: &str) -> SyncOutcome;

    /// Push a badge's timestamps to the server.
    fn send_badge(&mut self, mac: &str) -> SyncOutcome;

    /// Register a new badge on the server.
    fn create_badge(&mut self, name: &str, email: &str, mac: &str) -> SyncOutcome;

    /// The badge list, ordered by badge id.
    ///
    /// # Errors
    /// Returns `RegistryError::NotInitialized` before the first successful pull.
    fn badges(&self) -> Result<&BadgeCollection>;
}

/// Offline badge manager backed by the local device list.
#[derive(Debug)]
pub struct StandaloneBadgeManager {
    registry: BadgeRegistry,
}

impl StandaloneBadgeManager {
    /// Create a manager and pick its reference timestamp.
    ///
    /// The device list is not read until [`pull_badges_list`](BadgeManager::pull_badges_list).
    pub fn new(config: ManagerConfig) -> Self {
        let reference =
            ReferenceTimestamp::resolve(config.reference_timestamp, config.backfill_window_secs);
        Self {
            registry: BadgeRegistry::new(config.devices_path(), reference),
        }
    }

    pub fn reference(&self) -> &ReferenceTimestamp {
        self.registry.reference()
    }

    pub fn registry(&self) -> &BadgeRegistry {
        &self.registry
    }
}

impl BadgeManager for StandaloneBadgeManager {
    fn pull_badges_list(&mut self) -> Result<()> {
        self.registry.ensure_populated().map(|_| ())
    }

    /// Always completes: there is no server to refresh from, and callers
    /// written for the synchronized variant expect this call to succeed.
    fn pull_badge(&mut self, mac: &str) -> SyncOutcome {
        debug!("Standalone mode: nothing to pull for badge {}", mac);
        SyncOutcome::Completed
    }

    fn send_badge(&mut self, mac: &str) -> SyncOutcome {
        debug!("Standalone mode: not sending badge {}", mac);
        SyncOutcome::Unsupported {
            operation: "send_badge",
        }
    }

    fn create_badge(&mut self, _name: &str, _email: &str, _mac: &str) -> SyncOutcome {
        debug!("Command 'create_badge' is not implemented for standalone mode");
        SyncOutcome::Unsupported {
            operation: "create_badge",
        }
    }

    fn badges(&self) -> Result<&BadgeCollection> {
        self.registry.get()
    }
}
