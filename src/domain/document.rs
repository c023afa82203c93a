//! The persisted document: every collection the service stores, in one
//! strongly-typed, versioned aggregate.
//!
//! # Layout
//!
//! ```text
//! {
//!   "version": 1,
//!   "sequences":   { "chirps": 3, "users": 2 },
//!   "chirps":      { "<id>": Chirp, ... },
//!   "users":       { "<id>": User, ... },
//!   "revocations": { "<token>": Revocation, ... }
//! }
//! ```
//!
//! A document without `version` is the legacy layout (version 0). It is
//! migrated in memory on parse and written back in the current version by
//! the next mutation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::chirp::Chirp;
use crate::domain::foundation::{ChirpId, StoreError, UserId};
use crate::domain::session::Revocation;
use crate::domain::user::User;

/// Schema version written by this build.
pub const SCHEMA_VERSION: u32 = 1;

/// Last id assigned per collection.
///
/// Ids are never reused after deletion, so the next id cannot be derived
/// from the current count alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequences {
    #[serde(default)]
    pub chirps: u64,
    #[serde(default)]
    pub users: u64,
}

/// The single persisted aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub sequences: Sequences,
    #[serde(default)]
    pub chirps: BTreeMap<ChirpId, Chirp>,
    #[serde(default)]
    pub users: BTreeMap<UserId, User>,
    #[serde(default)]
    pub revocations: BTreeMap<String, Revocation>,
}

impl Document {
    /// An empty document in the current schema version.
    pub fn empty() -> Self {
        Self {
            version: SCHEMA_VERSION,
            sequences: Sequences::default(),
            chirps: BTreeMap::new(),
            users: BTreeMap::new(),
            revocations: BTreeMap::new(),
        }
    }

    /// Parses and migrates a serialized document.
    ///
    /// # Errors
    ///
    /// - `Format` if the bytes are not a valid document
    /// - `UnsupportedVersion` if the document is newer than this build
    pub fn from_json(bytes: &[u8]) -> Result<Self, StoreError> {
        let document: Document = serde_json::from_slice(bytes)?;
        document.migrate()
    }

    /// Serializes the document.
    pub fn to_json(&self) -> Result<Vec<u8>, StoreError> {
        Ok(serde_json::to_vec(self)?)
    }

    fn migrate(mut self) -> Result<Self, StoreError> {
        if self.version > SCHEMA_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: self.version,
                supported: SCHEMA_VERSION,
            });
        }

        if self.version == 0 {
            // Legacy files have no sequences; the highest key is the best
            // available record of what has been assigned.
            self.sequences = Sequences {
                chirps: self.highest_chirp_id(),
                users: self.highest_user_id(),
            };
            self.version = SCHEMA_VERSION;
        }

        Ok(self)
    }

    /// Reserves the next chirp id.
    ///
    /// Equals `count + 1` when nothing has been deleted.
    pub fn next_chirp_id(&mut self) -> ChirpId {
        let next = self.sequences.chirps.max(self.highest_chirp_id()) + 1;
        self.sequences.chirps = next;
        ChirpId::new(next)
    }

    /// Reserves the next user id.
    pub fn next_user_id(&mut self) -> UserId {
        let next = self.sequences.users.max(self.highest_user_id()) + 1;
        self.sequences.users = next;
        UserId::new(next)
    }

    /// Finds a user by exact (case-sensitive) email.
    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.values().find(|user| user.has_email(email))
    }

    fn highest_chirp_id(&self) -> u64 {
        self.chirps.keys().next_back().map_or(0, ChirpId::as_u64)
    }

    fn highest_user_id(&self) -> u64 {
        self.users.keys().next_back().map_or(0, UserId::as_u64)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}
