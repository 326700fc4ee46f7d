//! Reference timestamp selection.
//!
//! Every badge in a registry starts data collection from the same instant.
//! That instant is picked once, when the registry is created:
//!
//! - an explicit timestamp from the caller is used as-is, with a zero fraction;
//! - otherwise the current UTC time is captured and the backfill window
//!   (24 hours by default) is subtracted from its whole-second part.
//!
//! ```
//! use badgehub_registry::ReferenceTimestamp;
//!
//! let reference = ReferenceTimestamp::explicit(1_520_270_000);
//! assert_eq!(reference.seconds(), 1_520_270_000);
//! assert_eq!(reference.fraction(), 0);
//! ```

use badgehub_core::EpochTimestamp;
use badgehub_core::constants::DEFAULT_BACKFILL_WINDOW_SECS;
use serde::Serialize;
use tracing::debug;

/// Where a reference timestamp came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReferenceSource {
    /// Supplied by the caller.
    Explicit,

    /// Derived from the startup time minus a backfill window.
    Backfill {
        /// Window subtracted from the startup time, in seconds.
        window_secs: i64,
    },
}

/// The single instant all badges in a registry are initialized with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceTimestamp {
    instant: EpochTimestamp,
    source: ReferenceSource,
}

impl ReferenceTimestamp {
    /// Use a caller-supplied epoch timestamp (fraction 0).
    #[must_use]
    pub fn explicit(seconds: i64) -> Self {
        Self {
            instant: EpochTimestamp::from_seconds(seconds),
            source: ReferenceSource::Explicit,
        }
    }

    /// Place the reference `window_secs` before `now`, keeping `now`'s fraction.
    #[must_use]
    pub fn backfill_from(now: EpochTimestamp, window_secs: i64) -> Self {
        Self {
            instant: now.saturating_sub_seconds(window_secs),
            source: ReferenceSource::Backfill { window_secs },
        }
    }

    /// Place the reference one backfill window before the current UTC time.
    #[must_use]
    pub fn backfill(window_secs: i64) -> Self {
        Self::backfill_from(EpochTimestamp::now_utc(), window_secs)
    }

    /// Pick the reference for a new registry and log the choice.
    ///
    /// An explicit timestamp wins; without one the default backfill policy applies.
    #[must_use]
    pub fn resolve(explicit: Option<i64>, window_secs: i64) -> Self {
        let reference = match explicit {
            Some(seconds) => Self::explicit(seconds),
            None => Self::backfill(window_secs),
        };
        debug!(
            "[Badges] Standalone version. Will request data since {} {} ({})",
            reference.seconds(),
            reference.fraction(),
            reference.instant.pretty()
        );
        reference
    }

    /// Whole epoch seconds of the reference.
    #[must_use]
    pub fn seconds(&self) -> i64 {
        self.instant.seconds
    }

    /// Millisecond fraction of the reference.
    #[must_use]
    pub fn fraction(&self) -> u16 {
        self.instant.fraction
    }

    #[must_use]
    pub fn source(&self) -> ReferenceSource {
        self.source
    }
}

impl Default for ReferenceTimestamp {
    /// Current UTC time minus the default 24 hour backfill window.
    fn default() -> Self {
        Self::backfill(DEFAULT_BACKFILL_WINDOW_SECS)
    }
}
