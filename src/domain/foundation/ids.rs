//! Strongly-typed identifier value objects.
//!
//! Identifiers are positive integers assigned by the record store. They
//! serialize as plain JSON numbers, and as decimal strings when used as
//! object keys in the persisted document.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier for a chirp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChirpId(u64);

impl ChirpId {
    /// Creates a ChirpId from a raw value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChirpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChirpId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Unique identifier for a user.
///
/// Tokens carry this as their `sub` claim in decimal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Creates a UserId from a raw value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn chirp_id_displays_as_decimal() {
        assert_eq!(ChirpId::new(42).to_string(), "42");
    }

    #[test]
    fn user_id_parses_from_decimal_string() {
        let id: UserId = "17".parse().unwrap();
        assert_eq!(id.as_u64(), 17);
    }

    #[test]
    fn user_id_rejects_non_numeric_subject() {
        assert!("user-17".parse::<UserId>().is_err());
        assert!("-3".parse::<UserId>().is_err());
    }

    #[test]
    fn ids_serialize_as_plain_numbers() {
        let json = serde_json::to_string(&ChirpId::new(3)).unwrap();
        assert_eq!(json, "3");
    }

    #[test]
    fn ids_work_as_json_object_keys() {
        let mut map = BTreeMap::new();
        map.insert(UserId::new(2), "b");
        map.insert(UserId::new(10), "j");

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"2":"b","10":"j"}"#);

        let back: BTreeMap<UserId, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get(&UserId::new(10)).map(String::as_str), Some("j"));
    }

    #[test]
    fn ids_order_numerically() {
        assert!(ChirpId::new(9) < ChirpId::new(10));
    }
}
