//! Chirp repository backed by a record store.

use async_trait::async_trait;

use crate::domain::chirp::{Chirp, ChirpBody};
use crate::domain::foundation::{ChirpId, RepositoryError, UserId};
use crate::ports::{ChirpRepository, RecordStore};

/// Stores chirps in the `chirps` collection of the document.
#[derive(Debug, Clone)]
pub struct DocumentChirpRepository<S> {
    store: S,
}

impl<S: RecordStore> DocumentChirpRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: RecordStore> ChirpRepository for DocumentChirpRepository<S> {
    async fn create(&self, body: ChirpBody, author_id: UserId) -> Result<Chirp, RepositoryError> {
        let chirp = self
            .store
            .update(move |doc| {
                let id = doc.next_chirp_id();
                let chirp = Chirp::new(id, author_id, body);
                doc.chirps.insert(id, chirp.clone());
                Ok::<_, RepositoryError>(chirp)
            })
            .await?;

        tracing::debug!(chirp_id = %chirp.id, author_id = %author_id, "Chirp stored");
        Ok(chirp)
    }

    async fn list(&self) -> Result<Vec<Chirp>, RepositoryError> {
        let document = self.store.load().await?;
        Ok(document.chirps.into_values().collect())
    }

    async fn list_by_author(&self, author_id: UserId) -> Result<Vec<Chirp>, RepositoryError> {
        let document = self.store.load().await?;
        Ok(document
            .chirps
            .into_values()
            .filter(|chirp| chirp.is_authored_by(author_id))
            .collect())
    }

    async fn get_by_id(&self, id: ChirpId) -> Result<Chirp, RepositoryError> {
        let mut document = self.store.load().await?;
        document
            .chirps
            .remove(&id)
            .ok_or_else(|| RepositoryError::not_found("chirp", id))
    }

    async fn delete_by_id(&self, id: ChirpId) -> Result<(), RepositoryError> {
        let removed = self
            .store
            .update(move |doc| Ok::<_, RepositoryError>(doc.chirps.remove(&id).is_some()))
            .await?;

        tracing::debug!(chirp_id = %id, removed, "Chirp delete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{FileRecordStore, InMemoryRecordStore};
    use tempfile::TempDir;

    fn repo() -> DocumentChirpRepository<InMemoryRecordStore> {
        DocumentChirpRepository::new(InMemoryRecordStore::new())
    }

    fn body(text: &str) -> ChirpBody {
        ChirpBody::parse(text).unwrap()
    }

    #[tokio::test]
    async fn sequential_creates_get_ids_one_to_n() {
        let repo = repo();

        for expected in 1..=5 {
            let chirp = repo.create(body("hi"), UserId::new(1)).await.unwrap();
            assert_eq!(chirp.id, ChirpId::new(expected));
        }
    }

    #[tokio::test]
    async fn create_returns_stored_chirp() {
        let repo = repo();

        let chirp = repo.create(body("hello"), UserId::new(3)).await.unwrap();

        assert_eq!(chirp.author_id, UserId::new(3));
        assert_eq!(chirp.body, "hello");
        assert_eq!(repo.get_by_id(chirp.id).await.unwrap(), chirp);
    }

    #[tokio::test]
    async fn list_is_in_ascending_id_order() {
        let repo = repo();
        for _ in 0..12 {
            repo.create(body("x"), UserId::new(1)).await.unwrap();
        }

        let ids: Vec<u64> = repo.list().await.unwrap().iter().map(|c| c.id.as_u64()).collect();

        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn list_by_author_filters() {
        let repo = repo();
        repo.create(body("a1"), UserId::new(1)).await.unwrap();
        repo.create(body("b1"), UserId::new(2)).await.unwrap();
        repo.create(body("a2"), UserId::new(1)).await.unwrap();

        let bodies: Vec<String> = repo
            .list_by_author(UserId::new(1))
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.body)
            .collect();

        assert_eq!(bodies, vec!["a1", "a2"]);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let err = repo().get_by_id(ChirpId::new(9)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_of_missing_id_succeeds_and_get_stays_not_found() {
        let repo = repo();

        repo.delete_by_id(ChirpId::new(42)).await.unwrap();

        assert!(repo.get_by_id(ChirpId::new(42)).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn delete_removes_and_id_is_not_reused() {
        let repo = repo();
        repo.create(body("one"), UserId::new(1)).await.unwrap();
        let second = repo.create(body("two"), UserId::new(1)).await.unwrap();

        repo.delete_by_id(second.id).await.unwrap();
        let third = repo.create(body("three"), UserId::new(1)).await.unwrap();

        assert!(repo.get_by_id(second.id).await.unwrap_err().is_not_found());
        assert_eq!(third.id, ChirpId::new(3));
    }

    #[tokio::test]
    async fn chirps_survive_a_new_store_on_the_same_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("database.json");
        let store = FileRecordStore::new(&path);
        store.initialize().await.unwrap();
        DocumentChirpRepository::new(store)
            .create(body("persisted"), UserId::new(1))
            .await
            .unwrap();

        let reopened = DocumentChirpRepository::new(FileRecordStore::new(&path));
        let chirps = reopened.list().await.unwrap();

        assert_eq!(chirps.len(), 1);
        assert_eq!(chirps[0].body, "persisted");
    }
}
