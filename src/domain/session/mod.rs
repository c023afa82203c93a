//! Session module - refresh-token revocation and session errors.
//!
//! Tokens themselves are stateless; the only session state the server keeps
//! is the set of revoked refresh tokens.

mod errors;
mod revocation;

pub use errors::SessionError;
pub use revocation::Revocation;
