//! Chirp module - short user-authored posts.

mod body;
#[allow(clippy::module_inception)]
mod chirp;
mod errors;

pub use body::{ChirpBody, MASK, MAX_CHIRP_LENGTH};
pub use chirp::Chirp;
pub use errors::ChirpError;
