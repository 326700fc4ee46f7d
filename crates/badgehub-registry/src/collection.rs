//! Badge collection keyed by MAC and ordered by badge id.
//!
//! A [`BadgeCollection`] is built once from the device records and a
//! reference timestamp:
//!
//! 1. one [`Badge`] is created per record, all sharing the same init timestamps;
//! 2. badges are keyed by MAC; when a MAC repeats, the later line's data
//!    replaces the earlier badge but keeps its position;
//! 3. badges are stable-sorted by badge id, so equal ids stay in file order.
//!
//! ```
//! use badgehub_devices::DeviceListParser;
//! use badgehub_registry::{BadgeCollection, ReferenceTimestamp};
//!
//! let records = DeviceListParser::parse("C 5 1\nA 1 1\nB 3 1\n").unwrap();
//! let badges = BadgeCollection::from_records(records, &ReferenceTimestamp::explicit(0));
//!
//! let ids: Vec<i64> = badges.iter().map(|b| b.badge_id().value()).collect();
//! assert_eq!(ids, vec![1, 3, 5]);
//! assert!(badges.get("unknown").is_none());
//! ```

use crate::badge::{Badge, InitTimestamps};
use crate::reference::ReferenceTimestamp;
use badgehub_core::BadgeMac;
use badgehub_devices::DeviceRecord;
use std::collections::HashMap;
use tracing::warn;

/// Badges keyed by MAC, iterated in ascending badge id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeCollection {
    /// Badges sorted by badge id.
    badges: Vec<Badge>,

    /// MAC to position in `badges`.
    index: HashMap<BadgeMac, usize>,
}

impl BadgeCollection {
    /// Build the collection from device records.
    pub fn from_records(records: Vec<DeviceRecord>, reference: &ReferenceTimestamp) -> Self {
        let init = InitTimestamps::from_reference(reference);
        let mut badges: Vec<Badge> = Vec::with_capacity(records.len());
        let mut first_seen: HashMap<BadgeMac, usize> = HashMap::with_capacity(records.len());

        for record in records {
            let line_number = record.line_number;
            let badge = Badge::from_record(record, init);

            if let Some(&position) = first_seen.get(badge.mac()) {
                warn!(
                    "Duplicate badge MAC {} on line {}, replacing earlier entry",
                    badge.mac(),
                    line_number
                );
                badges[position] = badge;
            } else {
                first_seen.insert(badge.mac().clone(), badges.len());
                badges.push(badge);
            }
        }

        // sort_by_key is stable
        badges.sort_by_key(Badge::badge_id);

        let index = badges
            .iter()
            .enumerate()
            .map(|(position, badge)| (badge.mac().clone(), position))
            .collect();

        Self { badges, index }
    }

    /// Look up a badge by MAC. Unknown MACs yield `None`.
    pub fn get(&self, mac: &str) -> Option<&Badge> {
        self.index.get(mac).map(|&position| &self.badges[position])
    }

    pub fn contains(&self, mac: &str) -> bool {
        self.index.contains_key(mac)
    }

    /// Badges in ascending badge id order.
    pub fn iter(&self) -> std::slice::Iter<'_, Badge> {
        self.badges.iter()
    }

    /// MACs in ascending badge id order.
    pub fn macs(&self) -> impl Iterator<Item = &BadgeMac> {
        self.badges.iter().map(Badge::mac)
    }

    pub fn as_slice(&self) -> &[Badge] {
        &self.badges
    }

    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }
}

impl<'a> IntoIterator for &'a BadgeCollection {
    type Item = &'a Badge;
    type IntoIter = std::slice::Iter<'a, Badge>;

    fn into_iter(self) -> Self::IntoIter {
        self.badges.iter()
    }
}
