//! Application layer - command and query handlers.
//!
//! Handlers compose ports into the operations the HTTP adapter exposes.
//! They hold `Arc<dyn Port>` collaborators and are cheap to build per
//! request.

pub mod handlers;
