//! GetChirpHandler - Query handler for a single chirp.

use std::sync::Arc;

use crate::domain::chirp::{Chirp, ChirpError};
use crate::domain::foundation::ChirpId;
use crate::ports::ChirpRepository;

pub struct GetChirpHandler {
    chirps: Arc<dyn ChirpRepository>,
}

impl GetChirpHandler {
    pub fn new(chirps: Arc<dyn ChirpRepository>) -> Self {
        Self { chirps }
    }

    pub async fn handle(&self, id: ChirpId) -> Result<Chirp, ChirpError> {
        Ok(self.chirps.get_by_id(id).await?)
    }
}
