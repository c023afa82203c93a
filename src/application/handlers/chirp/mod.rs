//! Chirp command and query handlers.

mod create_chirp;
mod delete_chirp;
mod get_chirp;
mod list_chirps;

pub use create_chirp::{CreateChirpCommand, CreateChirpHandler};
pub use delete_chirp::{DeleteChirpCommand, DeleteChirpHandler};
pub use get_chirp::GetChirpHandler;
pub use list_chirps::{ListChirpsHandler, ListChirpsQuery, SortOrder};
