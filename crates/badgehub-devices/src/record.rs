use badgehub_core::{BadgeId, BadgeMac, ProjectId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One parsed line of the device list.
///
/// Records are transient: the registry turns each one into a badge right
/// after loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Badge MAC address (registry key).
    pub mac: BadgeMac,

    /// Badge identifier, the registry sort key.
    pub badge_id: BadgeId,

    /// Project the badge belongs to.
    pub project_id: ProjectId,

    /// Optional trailing device name, tokens joined by single spaces.
    pub name: Option<String>,

    /// 1-based line number in the source file.
    pub line_number: usize,
}

impl DeviceRecord {
    /// Create a record without a device name.
    pub fn new(
        mac: BadgeMac,
        badge_id: BadgeId,
        project_id: ProjectId,
        line_number: usize,
    ) -> Self {
        Self {
            mac,
            badge_id,
            project_id,
            name: None,
            line_number,
        }
    }

    /// Set the device name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl fmt::Display for DeviceRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "mac={} badge_id={} project_id={}",
            self.mac, self.badge_id, self.project_id
        )?;
        if let Some(name) = &self.name {
            write!(f, " name={name}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let record = DeviceRecord::new(
            BadgeMac::new("AA:BB:CC:DD:EE:FF").unwrap(),
            BadgeId::new(7),
            ProjectId::new(2),
            4,
        )
        .with_name("deviceA");

        assert_eq!(record.mac.as_str(), "AA:BB:CC:DD:EE:FF");
        assert_eq!(record.badge_id, BadgeId::new(7));
        assert_eq!(record.project_id, ProjectId::new(2));
        assert_eq!(record.name.as_deref(), Some("deviceA"));
        assert_eq!(record.line_number, 4);
    }

    #[test]
    fn test_record_display() {
        let record = DeviceRecord::new(
            BadgeMac::new("AA").unwrap(),
            BadgeId::new(1),
            ProjectId::new(9),
            1,
        );
        assert_eq!(record.to_string(), "mac=AA badge_id=1 project_id=9");
        assert_eq!(
            record.with_name("lobby").to_string(),
            "mac=AA badge_id=1 project_id=9 name=lobby"
        );
    }
}
