//! CreateChirpHandler - Command handler for posting a chirp.

use std::sync::Arc;

use crate::domain::chirp::{Chirp, ChirpBody, ChirpError};
use crate::domain::foundation::UserId;
use crate::ports::ChirpRepository;

/// Command to post a chirp as `author_id`.
#[derive(Debug, Clone)]
pub struct CreateChirpCommand {
    pub author_id: UserId,
    pub body: String,
}

/// Handler for posting chirps.
pub struct CreateChirpHandler {
    chirps: Arc<dyn ChirpRepository>,
}

impl CreateChirpHandler {
    pub fn new(chirps: Arc<dyn ChirpRepository>) -> Self {
        Self { chirps }
    }

    pub async fn handle(&self, cmd: CreateChirpCommand) -> Result<Chirp, ChirpError> {
        let body = ChirpBody::parse(&cmd.body)?;
        Ok(self.chirps.create(body, cmd.author_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;
    use crate::domain::foundation::{ChirpId, ErrorCode};

    #[tokio::test]
    async fn stores_cleaned_body_under_author() {
        let fx = Fixture::new();
        let handler = CreateChirpHandler::new(fx.chirps.clone());

        let chirp = handler
            .handle(CreateChirpCommand {
                author_id: UserId::new(4),
                body: "what a Kerfuffle today".into(),
            })
            .await
            .unwrap();

        assert_eq!(chirp.id, ChirpId::new(1));
        assert_eq!(chirp.author_id, UserId::new(4));
        assert_eq!(chirp.body, "what a **** today");
        assert_eq!(fx.chirps.get_by_id(chirp.id).await.unwrap(), chirp);
    }

    #[tokio::test]
    async fn too_long_body_is_rejected_and_not_stored() {
        let fx = Fixture::new();
        let handler = CreateChirpHandler::new(fx.chirps.clone());

        let err = handler
            .handle(CreateChirpCommand {
                author_id: UserId::new(1),
                body: "a".repeat(141),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(err.message(), "Chirp is too long");
        assert!(fx.chirps.list().await.unwrap().is_empty());
    }
}
