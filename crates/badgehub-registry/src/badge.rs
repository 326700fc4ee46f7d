use crate::reference::ReferenceTimestamp;
use badgehub_core::{BadgeId, BadgeMac, ProjectId};
use badgehub_devices::DeviceRecord;
use serde::Serialize;

/// Starting points for a badge's data streams.
///
/// In a registry all three values come from the same [`ReferenceTimestamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InitTimestamps {
    /// Whole seconds of the first audio sample to request.
    pub audio_ts_int: i64,

    /// Millisecond fraction of the first audio sample to request.
    pub audio_ts_fract: u16,

    /// Epoch seconds of the first proximity scan to request.
    pub proximity_ts: i64,
}

impl InitTimestamps {
    /// Derive all stream starting points from one reference instant.
    #[must_use]
    pub fn from_reference(reference: &ReferenceTimestamp) -> Self {
        Self {
            audio_ts_int: reference.seconds(),
            audio_ts_fract: reference.fraction(),
            proximity_ts: reference.seconds(),
        }
    }
}

/// A wearable sensor badge tracked by the registry.
///
/// Badges are created by the registry and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use badgehub_core::{BadgeId, BadgeMac, ProjectId};
/// use badgehub_registry::{Badge, InitTimestamps, ReferenceTimestamp};
///
/// let reference = ReferenceTimestamp::explicit(1_520_270_000);
/// let badge = Badge::new(
///     BadgeMac::new("e0:5b:1c:73:9b:01").unwrap(),
///     BadgeId::new(12),
///     ProjectId::new(1),
///     InitTimestamps::from_reference(&reference),
/// );
///
/// assert_eq!(badge.key(), "e0:5b:1c:73:9b:01");
/// assert_eq!(badge.init_audio_ts_int(), 1_520_270_000);
/// assert_eq!(badge.init_proximity_ts(), 1_520_270_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    mac: BadgeMac,
    key: String,
    badge_id: BadgeId,
    project_id: ProjectId,
    name: Option<String>,
    init: InitTimestamps,
}

impl Badge {
    /// Create a badge. The MAC doubles as the badge key.
    pub fn new(
        mac: BadgeMac,
        badge_id: BadgeId,
        project_id: ProjectId,
        init: InitTimestamps,
    ) -> Self {
        Self {
            key: mac.as_str().to_string(),
            mac,
            badge_id,
            project_id,
            name: None,
            init,
        }
    }

    /// Create a badge from a parsed device record.
    pub fn from_record(record: DeviceRecord, init: InitTimestamps) -> Self {
        let mut badge = Self::new(record.mac, record.badge_id, record.project_id, init);
        badge.name = record.name;
        badge
    }

    pub fn mac(&self) -> &BadgeMac {
        &self.mac
    }

    /// Key the badge is tracked under (the MAC; no other key exists offline).
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn badge_id(&self) -> BadgeId {
        self.badge_id
    }

    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Device name from the device list, if one was given.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn init_audio_ts_int(&self) -> i64 {
        self.init.audio_ts_int
    }

    pub fn init_audio_ts_fract(&self) -> u16 {
        self.init.audio_ts_fract
    }

    pub fn init_proximity_ts(&self) -> i64 {
        self.init.proximity_ts
    }
}
