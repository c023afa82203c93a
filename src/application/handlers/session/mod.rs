//! Session command handlers.
//!
//! The server keeps no session state beyond revoked refresh tokens. A
//! session is the pair of tokens issued at login.

mod login;
mod refresh;
mod revoke;

use std::time::Duration;

pub use login::{LoginCommand, LoginHandler, LoginResult};
pub use refresh::{RefreshCommand, RefreshHandler};
pub use revoke::{RevokeCommand, RevokeHandler};

/// Configured token lifetimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenLifetimes {
    pub access: Duration,
    pub refresh: Duration,
}

impl TokenLifetimes {
    /// Access lifetime for a login that asked for `requested_secs`.
    ///
    /// A request can only shorten the configured lifetime; zero or absent
    /// means the configured value.
    pub fn access_for(&self, requested_secs: Option<u64>) -> Duration {
        match requested_secs.map(Duration::from_secs) {
            Some(requested) if !requested.is_zero() && requested < self.access => requested,
            _ => self.access,
        }
    }
}
