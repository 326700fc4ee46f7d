use crate::constants::{MILLIS_PER_SECOND, PRETTY_TIMESTAMP_FORMAT};
use crate::{Result, error::Error};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// UTC instant split into whole epoch seconds and a millisecond fraction.
///
/// Badge audio timestamps are reported in this split form, so reference
/// instants are kept the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EpochTimestamp {
    /// Whole seconds since the Unix epoch.
    pub seconds: i64,

    /// Sub-second part in milliseconds (0-999).
    pub fraction: u16,
}

impl EpochTimestamp {
    /// Create a timestamp from whole seconds and a millisecond fraction.
    ///
    /// # Errors
    /// Returns `Error::InvalidFraction` if `fraction` is 1000 or more.
    pub fn new(seconds: i64, fraction: u16) -> Result<Self> {
        if fraction >= MILLIS_PER_SECOND {
            return Err(Error::InvalidFraction(fraction));
        }
        Ok(Self { seconds, fraction })
    }

    /// Timestamp at a whole second with a zero fraction.
    #[must_use]
    pub fn from_seconds(seconds: i64) -> Self {
        Self {
            seconds,
            fraction: 0,
        }
    }

    /// Capture the current UTC time.
    #[must_use]
    pub fn now_utc() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Split a `DateTime<Utc>` into seconds and milliseconds.
    #[must_use]
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        // timestamp_subsec_millis can report 1000 during a leap second
        let millis = dt.timestamp_subsec_millis().min(999) as u16;
        Self {
            seconds: dt.timestamp(),
            fraction: millis,
        }
    }

    /// Move the whole-second part back by `secs`, keeping the fraction.
    #[must_use]
    pub fn saturating_sub_seconds(self, secs: i64) -> Self {
        Self {
            seconds: self.seconds.saturating_sub(secs),
            fraction: self.fraction,
        }
    }

    /// Convert back into a `DateTime<Utc>`.
    ///
    /// # Errors
    /// Returns `Error::InvalidTimestamp` if the seconds fall outside chrono's range.
    pub fn to_datetime(self) -> Result<DateTime<Utc>> {
        DateTime::from_timestamp(
            self.seconds,
            u32::from(self.fraction) * 1_000_000,
        )
        .ok_or(Error::InvalidTimestamp(self.seconds))
    }

    /// Human-readable form used in diagnostics, e.g. `2018-03-05@17:13 UTC`.
    ///
    /// Falls back to the raw seconds when the value cannot be represented.
    #[must_use]
    pub fn pretty(self) -> String {
        match self.to_datetime() {
            Ok(dt) => dt.format(PRETTY_TIMESTAMP_FORMAT).to_string(),
            Err(_) => format!("{}s since epoch", self.seconds),
        }
    }
}

impl fmt::Display for EpochTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{:03}", self.seconds, self.fraction)
    }
}
