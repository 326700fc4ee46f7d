//! Property-based tests for badge collection ordering.
//!
//! These tests generate random device records and verify that the collection
//! is sorted by badge id, stable for equal ids, and keyed by unique MACs.

use badgehub_core::{BadgeId, BadgeMac, ProjectId};
use badgehub_devices::DeviceRecord;
use badgehub_registry::{BadgeCollection, ReferenceTimestamp};
use proptest::prelude::*;

/// Strategy for records with distinct MACs and a small id range (to force ties).
fn unique_records() -> impl Strategy<Value = Vec<DeviceRecord>> {
    prop::collection::vec((0i64..8, 0i64..4), 0..40).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (badge_id, project_id))| {
                DeviceRecord::new(
                    BadgeMac::new(format!("mac-{i:03}")).unwrap(),
                    BadgeId::new(badge_id),
                    ProjectId::new(project_id),
                    i + 1,
                )
            })
            .collect()
    })
}

proptest! {
    /// Property: badge ids never decrease along the iteration order.
    #[test]
    fn prop_sorted_by_badge_id(records in unique_records()) {
        let badges = BadgeCollection::from_records(records, &ReferenceTimestamp::explicit(0));
        let ids: Vec<BadgeId> = badges.iter().map(|b| b.badge_id()).collect();
        prop_assert!(ids.windows(2).all(|w| w[0] <= w[1]));
    }

    /// Property: equal badge ids keep the order of their source lines.
    #[test]
    fn prop_ties_follow_file_order(records in unique_records()) {
        let mut expected: Vec<(BadgeId, String)> = records
            .iter()
            .map(|r| (r.badge_id, r.mac.as_str().to_string()))
            .collect();
        expected.sort_by_key(|(id, _)| *id);

        let badges = BadgeCollection::from_records(records, &ReferenceTimestamp::explicit(0));
        let actual: Vec<(BadgeId, String)> = badges
            .iter()
            .map(|b| (b.badge_id(), b.mac().as_str().to_string()))
            .collect();

        prop_assert_eq!(actual, expected);
    }

    /// Property: every record is reachable by MAC with the shared reference.
    #[test]
    fn prop_every_mac_is_indexed(records in unique_records(), ts in any::<i64>()) {
        let macs: Vec<String> = records.iter().map(|r| r.mac.as_str().to_string()).collect();
        let badges = BadgeCollection::from_records(records, &ReferenceTimestamp::explicit(ts));

        prop_assert_eq!(badges.len(), macs.len());
        for mac in &macs {
            let badge = badges.get(mac);
            prop_assert!(badge.is_some());
            let badge = badge.unwrap();
            prop_assert_eq!(badge.init_audio_ts_int(), ts);
            prop_assert_eq!(badge.init_proximity_ts(), ts);
        }
    }

    /// Property: repeated MACs collapse to one badge carrying the last line's data.
    #[test]
    fn prop_duplicate_macs_collapse(ids in prop::collection::vec(0i64..100, 1..10)) {
        let records: Vec<DeviceRecord> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| {
                DeviceRecord::new(
                    BadgeMac::new("same").unwrap(),
                    BadgeId::new(*id),
                    ProjectId::new(1),
                    i + 1,
                )
            })
            .collect();

        let badges = BadgeCollection::from_records(records, &ReferenceTimestamp::explicit(0));
        prop_assert_eq!(badges.len(), 1);
        let last = *ids.last().unwrap();
        prop_assert_eq!(badges.get("same").unwrap().badge_id().value(), last);
    }
}
