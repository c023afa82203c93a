//! Storage Adapters
//!
//! Implementations of the `RecordStore` port and the entity repositories
//! built on top of it.
//!
//! ## Available Adapters
//!
//! - **FileRecordStore** - The document as a JSON file on disk
//! - **InMemoryRecordStore** - The document in memory (testing/ephemeral)
//! - **DocumentChirpRepository**, **DocumentUserRepository**,
//!   **DocumentRevocationRepository** - Entity access over any store
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{DocumentChirpRepository, FileRecordStore};
//!
//! let store = FileRecordStore::new("./database.json");
//! store.initialize().await?;
//! let chirps = DocumentChirpRepository::new(store.clone());
//! ```

mod chirp_repository;
mod file_record_store;
mod in_memory_record_store;
mod revocation_repository;
mod user_repository;

pub use chirp_repository::DocumentChirpRepository;
pub use file_record_store::FileRecordStore;
pub use in_memory_record_store::InMemoryRecordStore;
pub use revocation_repository::DocumentRevocationRepository;
pub use user_repository::DocumentUserRepository;
