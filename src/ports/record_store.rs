//! Record store port - the single persisted document and its lock.
//!
//! # Contract
//!
//! - `load` sees a complete document, never a half-written one
//! - `write` replaces the whole document and is serialized against every
//!   other `load`, `write` and `update`
//! - `update` holds the exclusive lock across load, mutation and write
//!
//! `load` followed by `write` is *not* atomic: another writer may commit in
//! between and its changes are overwritten. Repositories therefore mutate
//! only through `update`.

use async_trait::async_trait;

use crate::domain::document::Document;
use crate::domain::foundation::StoreError;

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Creates an empty document if none exists yet.
    ///
    /// Idempotent: an existing document is left untouched.
    ///
    /// # Errors
    ///
    /// - `Io` if the document cannot be created
    async fn initialize(&self) -> Result<(), StoreError>;

    /// Reads the full document under the shared lock.
    ///
    /// # Errors
    ///
    /// - `Io` if the document cannot be read
    /// - `Format` / `UnsupportedVersion` if it cannot be parsed
    async fn load(&self) -> Result<Document, StoreError>;

    /// Replaces the full document under the exclusive lock.
    ///
    /// # Errors
    ///
    /// - `Io` if the document cannot be written
    async fn write(&self, document: &Document) -> Result<(), StoreError>;

    /// Runs `mutate` against the current document inside one exclusive
    /// critical section, then writes the result.
    ///
    /// If `mutate` returns an error nothing is written and the error is
    /// returned unchanged.
    async fn update<T, E, F>(&self, mutate: F) -> Result<T, E>
    where
        T: Send,
        E: From<StoreError> + Send,
        F: FnOnce(&mut Document) -> Result<T, E> + Send;
}
