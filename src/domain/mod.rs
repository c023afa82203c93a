//! Domain layer - entities, value objects and the persisted document.
//!
//! Nothing in here performs I/O. Ports in `crate::ports` describe how the
//! domain is stored and authenticated; adapters implement them.

pub mod chirp;
pub mod document;
pub mod foundation;
pub mod session;
pub mod user;
