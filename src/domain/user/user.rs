//! User entity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;

/// A registered user.
///
/// Field names match the persisted document layout. The password hash is
/// stored under `password` as base64 of its bytes; it never leaves the
/// server (HTTP DTOs omit it and `Debug` redacts it).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub id: UserId,
    #[serde(rename = "password", with = "hash_bytes")]
    pub password_hash: String,
    /// Paid subscription flag, flipped by the billing webhook.
    #[serde(rename = "is_chirpy_red", default)]
    pub is_chirpy_red: bool,
}

impl User {
    /// Creates a new user without a subscription.
    pub fn new(id: UserId, email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            id,
            password_hash: password_hash.into(),
            is_chirpy_red: false,
        }
    }

    /// Returns true if this user owns exactly `email` (case-sensitive).
    pub fn has_email(&self, email: &str) -> bool {
        self.email == email
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("is_chirpy_red", &self.is_chirpy_red)
            .finish()
    }
}

/// `password` is a byte array on disk, which JSON carries as standard
/// base64. Bare bcrypt strings (always containing `$`, never valid base64)
/// are read as-is and rewritten encoded.
mod hash_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(hash: &str, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(hash.as_bytes()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match STANDARD.decode(raw.as_bytes()) {
            Ok(bytes) => String::from_utf8(bytes)
                .map_err(|_| D::Error::custom("password hash is not UTF-8")),
            Err(_) if raw.contains('$') => Ok(raw),
            Err(e) => Err(D::Error::custom(format!("invalid password bytes: {e}"))),
        }
    }
}
