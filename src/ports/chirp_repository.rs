//! Chirp repository port.

use async_trait::async_trait;

use crate::domain::chirp::{Chirp, ChirpBody};
use crate::domain::foundation::{ChirpId, RepositoryError, UserId};

/// Persistence for chirps.
///
/// Ids are assigned by the repository, start at 1 and are never reused.
#[async_trait]
pub trait ChirpRepository: Send + Sync {
    /// Stores a new chirp under the next free id.
    async fn create(&self, body: ChirpBody, author_id: UserId) -> Result<Chirp, RepositoryError>;

    /// All chirps in ascending id order.
    async fn list(&self) -> Result<Vec<Chirp>, RepositoryError>;

    /// Chirps written by `author_id`, in ascending id order.
    async fn list_by_author(&self, author_id: UserId) -> Result<Vec<Chirp>, RepositoryError>;

    /// # Errors
    ///
    /// - `NotFound` if no chirp has this id
    async fn get_by_id(&self, id: ChirpId) -> Result<Chirp, RepositoryError>;

    /// Removes a chirp. Deleting a missing id succeeds.
    async fn delete_by_id(&self, id: ChirpId) -> Result<(), RepositoryError>;
}
