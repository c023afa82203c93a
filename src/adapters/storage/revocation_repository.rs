//! Revocation repository backed by a record store.

use async_trait::async_trait;

use crate::domain::document::Document;
use crate::domain::foundation::{RepositoryError, Timestamp};
use crate::domain::session::Revocation;
use crate::ports::{RecordStore, RevocationRepository};

/// Stores revoked refresh tokens in the `revocations` collection.
#[derive(Debug, Clone)]
pub struct DocumentRevocationRepository<S> {
    store: S,
}

impl<S: RecordStore> DocumentRevocationRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

fn sweep(document: &mut Document, now: &Timestamp) -> usize {
    let before = document.revocations.len();
    document
        .revocations
        .retain(|_, revocation| !revocation.is_prunable_at(now));
    before - document.revocations.len()
}

#[async_trait]
impl<S: RecordStore> RevocationRepository for DocumentRevocationRepository<S> {
    async fn revoke(&self, token: &str, expires_at: Option<Timestamp>) -> Result<(), RepositoryError> {
        let token = token.to_string();
        let now = Timestamp::now();

        let pruned = self
            .store
            .update(move |doc| {
                let pruned = sweep(doc, &now);
                doc.revocations
                    .insert(token.clone(), Revocation::new(token, now, expires_at));
                Ok::<_, RepositoryError>(pruned)
            })
            .await?;

        tracing::info!(pruned, "Refresh token revoked");
        Ok(())
    }

    async fn is_revoked(&self, token: &str) -> Result<bool, RepositoryError> {
        let document = self.store.load().await?;
        Ok(document
            .revocations
            .get(token)
            .is_some_and(Revocation::is_active))
    }

    async fn prune_expired(&self, now: Timestamp) -> Result<usize, RepositoryError> {
        let pruned = self
            .store
            .update(move |doc| Ok::<_, RepositoryError>(sweep(doc, &now)))
            .await?;

        if pruned > 0 {
            tracing::debug!(pruned, "Pruned expired revocations");
        }
        Ok(pruned)
    }
}
