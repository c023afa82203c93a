//! Revocation records for refresh tokens.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// Marker that a refresh token must no longer be honored.
///
/// `expires_at` is the revoked token's own expiry. Once it has passed the
/// token would be rejected anyway, so the record can be pruned. Records
/// written without it are kept forever.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revocation {
    pub token: String,
    pub revoked_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<Timestamp>,
}

impl Revocation {
    pub fn new(token: impl Into<String>, revoked_at: Timestamp, expires_at: Option<Timestamp>) -> Self {
        Self {
            token: token.into(),
            revoked_at,
            expires_at,
        }
    }

    /// A record only counts when its revocation time is set.
    pub fn is_active(&self) -> bool {
        !self.revoked_at.is_zero()
    }

    /// True once the revoked token's expiry is at or before `now`.
    pub fn is_prunable_at(&self, now: &Timestamp) -> bool {
        self.expires_at.is_some_and(|expiry| !expiry.is_after(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> Timestamp {
        Timestamp::from_unix_secs(secs).unwrap()
    }

    #[test]
    fn record_with_revocation_time_is_active() {
        let revocation = Revocation::new("tok", at(1_700_000_000), None);
        assert!(revocation.is_active());
    }

    #[test]
    fn zero_revocation_time_is_inactive() {
        let revocation: Revocation =
            serde_json::from_str(r#"{"token":"tok","revoked_at":"0001-01-01T00:00:00Z"}"#).unwrap();
        assert!(!revocation.is_active());
    }

    #[test]
    fn prunable_from_expiry_instant_onwards() {
        let revocation = Revocation::new("tok", at(100), Some(at(200)));
        assert!(!revocation.is_prunable_at(&at(199)));
        assert!(revocation.is_prunable_at(&at(200)));
        assert!(revocation.is_prunable_at(&at(201)));
    }

    #[test]
    fn records_without_expiry_are_never_prunable() {
        let revocation = Revocation::new("tok", at(100), None);
        assert!(!revocation.is_prunable_at(&at(i32::MAX as i64)));
    }

    #[test]
    fn expiry_is_omitted_from_json_when_unknown() {
        let json = serde_json::to_value(Revocation::new("tok", at(0), None)).unwrap();
        assert!(json.get("expires_at").is_none());
        assert_eq!(json["revoked_at"], "1970-01-01T00:00:00Z");
    }
}
