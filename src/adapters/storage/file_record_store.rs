//! File-backed Record Store Adapter
//!
//! Keeps the whole document in one JSON file. Every operation reopens the
//! file by path; a process-wide async reader/writer lock serializes writers
//! against readers.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::RwLock;

use crate::domain::document::Document;
use crate::domain::foundation::StoreError;
use crate::ports::RecordStore;

/// JSON file storage for the persisted document.
#[derive(Debug, Clone)]
pub struct FileRecordStore {
    path: PathBuf,
    lock: Arc<RwLock<()>>,
}

impl FileRecordStore {
    /// Create a store for the document at `path`.
    ///
    /// Nothing touches the disk until `initialize` or the first operation.
    ///
    /// # Example
    /// ```ignore
    /// let store = FileRecordStore::new("./database.json");
    /// store.initialize().await?;
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Arc::new(RwLock::new(())),
        }
    }

    /// Path of the document file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the next document is staged in before the rename.
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn read_document(&self) -> Result<Document, StoreError> {
        let bytes = fs::read(&self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;
        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "Loaded document");
        Document::from_json(&bytes)
    }

    /// Writes to a staging file and renames it over the document, so readers
    /// never observe a partial file.
    async fn write_document(&self, document: &Document) -> Result<(), StoreError> {
        let bytes = document.to_json()?;
        let staging = self.staging_path();

        fs::write(&staging, &bytes)
            .await
            .map_err(|e| StoreError::io(&staging, e))?;
        fs::rename(&staging, &self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;

        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "Wrote document");
        Ok(())
    }
}

#[async_trait]
impl RecordStore for FileRecordStore {
    async fn initialize(&self) -> Result<(), StoreError> {
        let _guard = self.lock.write().await;

        let exists = fs::try_exists(&self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;
        if exists {
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(parent, e))?;
        }

        self.write_document(&Document::empty()).await?;
        tracing::info!(path = %self.path.display(), "Created empty document");
        Ok(())
    }

    async fn load(&self) -> Result<Document, StoreError> {
        let _guard = self.lock.read().await;
        self.read_document().await
    }

    async fn write(&self, document: &Document) -> Result<(), StoreError> {
        let _guard = self.lock.write().await;
        self.write_document(document).await
    }

    async fn update<T, E, F>(&self, mutate: F) -> Result<T, E>
    where
        T: Send,
        E: From<StoreError> + Send,
        F: FnOnce(&mut Document) -> Result<T, E> + Send,
    {
        let _guard = self.lock.write().await;

        let mut document = self.read_document().await?;
        let value = mutate(&mut document)?;
        self.write_document(&document).await?;

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chirp::{Chirp, ChirpBody};
    use crate::domain::foundation::{ChirpId, UserId};
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileRecordStore {
        FileRecordStore::new(dir.path().join("database.json"))
    }

    fn insert_chirp(document: &mut Document, body: &str) -> ChirpId {
        let id = document.next_chirp_id();
        let body = ChirpBody::parse(body).unwrap();
        document.chirps.insert(id, Chirp::new(id, UserId::new(1), body));
        id
    }

    #[tokio::test]
    async fn initialize_creates_empty_document() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.initialize().await.unwrap();

        assert!(store.path().exists());
        assert_eq!(store.load().await.unwrap(), Document::empty());
    }

    #[tokio::test]
    async fn initialize_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.initialize().await.unwrap();

        let mut document = store.load().await.unwrap();
        insert_chirp(&mut document, "keep me");
        store.write(&document).await.unwrap();

        store.initialize().await.unwrap();
        assert_eq!(store.load().await.unwrap().chirps.len(), 1);
    }

    #[tokio::test]
    async fn initialize_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = FileRecordStore::new(dir.path().join("nested/data/db.json"));

        store.initialize().await.unwrap();

        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn write_then_load_returns_equal_document() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.initialize().await.unwrap();

        let mut document = Document::empty();
        insert_chirp(&mut document, "hello");
        insert_chirp(&mut document, "world");
        store.write(&document).await.unwrap();

        assert_eq!(store.load().await.unwrap(), document);
    }

    #[tokio::test]
    async fn write_leaves_no_staging_file_behind() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.initialize().await.unwrap();
        store.write(&Document::empty()).await.unwrap();

        assert!(!store.staging_path().exists());
    }

    #[tokio::test]
    async fn load_without_initialize_is_io_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(matches!(store.load().await, Err(StoreError::Io { .. })));
    }

    #[tokio::test]
    async fn load_of_corrupt_file_is_format_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), b"not json").unwrap();

        assert!(matches!(store.load().await, Err(StoreError::Format(_))));
    }

    #[tokio::test]
    async fn legacy_file_is_upgraded_on_next_update() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(
            store.path(),
            br#"{"chirps":{"7":{"author_id":1,"body":"old","id":7}},"users":{},"revocations":{}}"#,
        )
        .unwrap();

        let id = store
            .update(|doc| Ok::<_, StoreError>(insert_chirp(doc, "new")))
            .await
            .unwrap();
        assert_eq!(id, ChirpId::new(8));

        let raw: serde_json::Value =
            serde_json::from_slice(&std::fs::read(store.path()).unwrap()).unwrap();
        assert_eq!(raw["version"], crate::domain::document::SCHEMA_VERSION);
        assert_eq!(raw["sequences"]["chirps"], 8);
    }

    #[tokio::test]
    async fn failed_update_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.initialize().await.unwrap();

        let result: Result<(), StoreError> = store
            .update(|doc| {
                insert_chirp(doc, "discarded");
                Err(StoreError::UnsupportedVersion { found: 0, supported: 0 })
            })
            .await;

        assert!(result.is_err());
        assert!(store.load().await.unwrap().chirps.is_empty());
    }
}
