//! ListChirpsHandler - Query handler for chirp listings.

use std::sync::Arc;

use crate::domain::chirp::{Chirp, ChirpError};
use crate::domain::foundation::UserId;
use crate::ports::ChirpRepository;

/// Order of a chirp listing by id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Query for chirps, optionally restricted to one author.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListChirpsQuery {
    pub author_id: Option<UserId>,
    pub order: SortOrder,
}

/// Handler for listing chirps.
pub struct ListChirpsHandler {
    chirps: Arc<dyn ChirpRepository>,
}

impl ListChirpsHandler {
    pub fn new(chirps: Arc<dyn ChirpRepository>) -> Self {
        Self { chirps }
    }

    pub async fn handle(&self, query: ListChirpsQuery) -> Result<Vec<Chirp>, ChirpError> {
        let mut chirps = match query.author_id {
            Some(author_id) => self.chirps.list_by_author(author_id).await?,
            None => self.chirps.list().await?,
        };

        if query.order == SortOrder::Descending {
            chirps.reverse();
        }
        Ok(chirps)
    }
}
