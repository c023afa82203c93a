//! DeleteChirpHandler - Command handler for removing a chirp.

use std::sync::Arc;

use crate::domain::chirp::ChirpError;
use crate::domain::foundation::{ChirpId, UserId};
use crate::ports::ChirpRepository;

/// Command to delete `chirp_id` on behalf of `requester`.
#[derive(Debug, Clone, Copy)]
pub struct DeleteChirpCommand {
    pub chirp_id: ChirpId,
    pub requester: UserId,
}

/// Handler for deleting chirps. Only the author may delete.
pub struct DeleteChirpHandler {
    chirps: Arc<dyn ChirpRepository>,
}

impl DeleteChirpHandler {
    pub fn new(chirps: Arc<dyn ChirpRepository>) -> Self {
        Self { chirps }
    }

    pub async fn handle(&self, cmd: DeleteChirpCommand) -> Result<(), ChirpError> {
        let chirp = self.chirps.get_by_id(cmd.chirp_id).await?;

        if !chirp.is_authored_by(cmd.requester) {
            tracing::warn!(
                chirp_id = %cmd.chirp_id,
                requester = %cmd.requester,
                "Refused to delete another user's chirp"
            );
            return Err(ChirpError::Forbidden(cmd.chirp_id));
        }

        self.chirps.delete_by_id(cmd.chirp_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Fixture;
    use crate::domain::chirp::ChirpBody;
    use crate::domain::foundation::ErrorCode;

    #[tokio::test]
    async fn author_can_delete() {
        let fx = Fixture::new();
        let chirp = fx
            .chirps
            .create(ChirpBody::parse("bye").unwrap(), UserId::new(1))
            .await
            .unwrap();

        DeleteChirpHandler::new(fx.chirps.clone())
            .handle(DeleteChirpCommand {
                chirp_id: chirp.id,
                requester: UserId::new(1),
            })
            .await
            .unwrap();

        assert!(fx.chirps.get_by_id(chirp.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn other_user_is_forbidden_and_chirp_survives() {
        let fx = Fixture::new();
        let chirp = fx
            .chirps
            .create(ChirpBody::parse("mine").unwrap(), UserId::new(1))
            .await
            .unwrap();

        let err = DeleteChirpHandler::new(fx.chirps.clone())
            .handle(DeleteChirpCommand {
                chirp_id: chirp.id,
                requester: UserId::new(2),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::Forbidden);
        assert!(fx.chirps.get_by_id(chirp.id).await.is_ok());
    }

    #[tokio::test]
    async fn missing_chirp_is_not_found() {
        let fx = Fixture::new();

        let err = DeleteChirpHandler::new(fx.chirps.clone())
            .handle(DeleteChirpCommand {
                chirp_id: ChirpId::new(9),
                requester: UserId::new(1),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::NotFound);
    }
}
