//! Chirp entity.

use serde::{Deserialize, Serialize};

use super::ChirpBody;
use crate::domain::foundation::{ChirpId, UserId};

/// A stored chirp.
///
/// Field names match the persisted document layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chirp {
    pub author_id: UserId,
    pub body: String,
    pub id: ChirpId,
}

impl Chirp {
    /// Creates a chirp from an already-cleaned body.
    pub fn new(id: ChirpId, author_id: UserId, body: ChirpBody) -> Self {
        Self {
            author_id,
            body: body.into_inner(),
            id,
        }
    }

    /// Returns true if `user_id` wrote this chirp.
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }
}
