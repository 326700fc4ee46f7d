use crate::{Result, error::Error};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Badge MAC address, the registry key.
///
/// The address is stored exactly as written in the device list. Its format is
/// not validated: any non-empty token is a usable key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BadgeMac(String);

impl BadgeMac {
    /// Create a badge MAC from a token.
    ///
    /// # Errors
    /// Returns `Error::EmptyMac` if the token is empty or only whitespace.
    pub fn new(mac: impl Into<String>) -> Result<Self> {
        let mac = mac.into();
        if mac.trim().is_empty() {
            return Err(Error::EmptyMac);
        }
        Ok(BadgeMac(mac))
    }

    /// Get the MAC as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BadgeMac {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for BadgeMac {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BadgeMac::new(s)
    }
}

impl AsRef<str> for BadgeMac {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Lets `HashMap<BadgeMac, _>` be queried with a plain `&str`.
impl Borrow<str> for BadgeMac {
    fn borrow(&self) -> &str {
        &self.0
    }
}

fn parse_integer(field: &'static str, s: &str) -> Result<i64> {
    s.parse().map_err(|_| Error::InvalidIdentifier {
        field,
        value: s.to_string(),
    })
}

/// Numeric badge identifier, used as the registry sort key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BadgeId(i64);

impl BadgeId {
    #[must_use]
    pub fn new(id: i64) -> Self {
        BadgeId(id)
    }

    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BadgeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for BadgeId {
    type Err = Error;

    /// # Errors
    /// Returns `Error::InvalidIdentifier` if the token is not an integer.
    fn from_str(s: &str) -> Result<Self> {
        parse_integer("badge id", s).map(BadgeId)
    }
}

/// Numeric project identifier a badge belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProjectId(i64);

impl ProjectId {
    #[must_use]
    pub fn new(id: i64) -> Self {
        ProjectId(id)
    }

    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProjectId {
    type Err = Error;

    /// # Errors
    /// Returns `Error::InvalidIdentifier` if the token is not an integer.
    fn from_str(s: &str) -> Result<Self> {
        parse_integer("project id", s).map(ProjectId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    #[rstest]
    #[case("AA:BB:CC:DD:EE:FF")]
    #[case("not-a-mac")]
    #[case("e0:5b:1c:73:9b:01")]
    fn test_badge_mac_accepts_any_token(#[case] input: &str) {
        let mac: BadgeMac = input.parse().unwrap();
        assert_eq!(mac.as_str(), input);
        assert_eq!(mac.to_string(), input);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_badge_mac_rejects_empty(#[case] input: &str) {
        assert_eq!(BadgeMac::new(input), Err(Error::EmptyMac));
    }

    #[test]
    fn test_badge_mac_borrow_lookup() {
        let mut map = HashMap::new();
        map.insert(BadgeMac::new("AA:BB").unwrap(), 1);
        assert_eq!(map.get("AA:BB"), Some(&1));
        assert_eq!(map.get("unknown"), None);
    }

    #[rstest]
    #[case("7", 7)]
    #[case("0", 0)]
    #[case("-3", -3)]
    #[case("+12", 12)]
    fn test_badge_id_valid(#[case] input: &str, #[case] expected: i64) {
        let id: BadgeId = input.parse().unwrap();
        assert_eq!(id.value(), expected);
    }

    #[rstest]
    #[case("seven")]
    #[case("7.5")]
    #[case("")]
    #[case("0x10")]
    fn test_badge_id_invalid(#[case] input: &str) {
        let result: Result<BadgeId> = input.parse();
        assert_eq!(
            result,
            Err(Error::InvalidIdentifier {
                field: "badge id",
                value: input.to_string(),
            })
        );
    }

    #[test]
    fn test_project_id_error_names_field() {
        let err = "abc".parse::<ProjectId>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid project id: \"abc\" is not an integer");
    }

    #[test]
    fn test_badge_id_ordering() {
        let mut ids = vec![BadgeId::new(5), BadgeId::new(1), BadgeId::new(3)];
        ids.sort();
        assert_eq!(ids, vec![BadgeId::new(1), BadgeId::new(3), BadgeId::new(5)]);
    }

    #[test]
    fn test_identifiers_serialize_transparently() {
        let json = serde_json::to_string(&BadgeId::new(42)).unwrap();
        assert_eq!(json, "42");
        let json = serde_json::to_string(&BadgeMac::new("AA").unwrap()).unwrap();
        assert_eq!(json, "\"AA\"");
    }
}
