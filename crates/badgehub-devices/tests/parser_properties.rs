//! Property-based tests for the device list parser.
//!
//! These tests generate random device lists and check that the parser keeps
//! every device, keeps file order and never turns a bad line into a record.

use badgehub_devices::{DeviceFileError, DeviceListParser};
use proptest::prelude::*;

/// Strategy for MAC-like tokens (no whitespace, never starting with `#`).
fn mac_token() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9a-f]{2}(:[0-9a-f]{2}){5}")
        .expect("Failed to create MAC regex strategy")
}

/// Strategy for optional device names made of plain words.
fn device_name() -> impl Strategy<Value = Option<String>> {
    prop::option::of(
        prop::string::string_regex("[A-Za-z0-9_-]{1,10}( [A-Za-z0-9_-]{1,10}){0,2}")
            .expect("Failed to create device name regex strategy"),
    )
}

/// Strategy for one device entry.
fn device_entry() -> impl Strategy<Value = (String, i64, i64, Option<String>)> {
    (mac_token(), any::<i64>(), any::<i64>(), device_name())
}

/// Strategy for filler lines that must be skipped.
fn filler_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        Just("\t".to_string()),
        prop::string::string_regex("[ ]{0,4}#[ -~]{0,30}")
            .expect("Failed to create comment regex strategy"),
    ]
}

proptest! {
    /// Property: every entry comes back in order with its fields intact,
    /// regardless of interleaved comments and blank lines.
    #[test]
    fn prop_parse_preserves_entries(
        entries in prop::collection::vec((device_entry(), filler_line()), 0..30),
    ) {
        let mut text = String::new();
        for ((mac, badge_id, project_id, name), filler) in &entries {
            text.push_str(filler);
            text.push('\n');
            text.push_str(&format!("{mac} {badge_id} {project_id}"));
            if let Some(name) = name {
                text.push(' ');
                text.push_str(name);
            }
            text.push('\n');
        }

        let records = DeviceListParser::parse(&text).unwrap();
        prop_assert_eq!(records.len(), entries.len());

        for (record, ((mac, badge_id, project_id, name), _)) in records.iter().zip(&entries) {
            prop_assert_eq!(record.mac.as_str(), mac.as_str());
            prop_assert_eq!(record.badge_id.value(), *badge_id);
            prop_assert_eq!(record.project_id.value(), *project_id);
            prop_assert_eq!(record.name.as_deref(), name.as_deref());
        }
    }

    /// Property: a line with fewer than three tokens is always rejected.
    #[test]
    fn prop_short_lines_rejected(mac in mac_token(), badge_id in any::<i64>()) {
        let line = format!("{mac} {badge_id}");
        let result = DeviceListParser::parse_line(1, &line);
        let is_malformed = matches!(result, Err(DeviceFileError::MalformedLine { .. }));
        prop_assert!(is_malformed);
    }

    /// Property: a non-integer badge id is always rejected.
    #[test]
    fn prop_non_integer_badge_id_rejected(
        mac in mac_token(),
        bad_id in prop::string::string_regex("[a-zA-Z][a-zA-Z0-9]{0,8}")
            .expect("Failed to create identifier regex strategy"),
    ) {
        let line = format!("{mac} {bad_id} 1");
        let result = DeviceListParser::parse_line(1, &line);
        let is_malformed = matches!(result, Err(DeviceFileError::MalformedLine { .. }));
        prop_assert!(is_malformed);
    }
}
