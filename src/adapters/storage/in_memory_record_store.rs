//! In-Memory Record Store Adapter
//!
//! Holds the document in memory behind the same reader/writer discipline as
//! the file store. Useful for testing and ephemeral deployments.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::document::Document;
use crate::domain::foundation::StoreError;
use crate::ports::RecordStore;

/// In-memory storage for the persisted document
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    document: Arc<RwLock<Document>>,
}

impl InMemoryRecordStore {
    /// Create a store holding an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `document`
    pub fn with_document(document: Document) -> Self {
        Self {
            document: Arc::new(RwLock::new(document)),
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn initialize(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn load(&self) -> Result<Document, StoreError> {
        Ok(self.document.read().await.clone())
    }

    async fn write(&self, document: &Document) -> Result<(), StoreError> {
        *self.document.write().await = document.clone();
        Ok(())
    }

    async fn update<T, E, F>(&self, mutate: F) -> Result<T, E>
    where
        T: Send,
        E: From<StoreError> + Send,
        F: FnOnce(&mut Document) -> Result<T, E> + Send,
    {
        let mut guard = self.document.write().await;

        // Mutate a copy so a failed mutation leaves the stored document as is.
        let mut next = guard.clone();
        let value = mutate(&mut next)?;
        *guard = next;

        Ok(value)
    }
}
