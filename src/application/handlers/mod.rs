//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.
//!
//! - `chirp` - create, list, get and delete chirps
//! - `user` - registration, account updates and subscription upgrades
//! - `session` - login, access-token refresh and refresh-token revocation

pub mod chirp;
pub mod session;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;
