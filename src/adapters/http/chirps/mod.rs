//! HTTP adapter for chirps.

mod dto;
mod handlers;
mod routes;

pub use dto::{ChirpResponse, CreateChirpRequest, ListChirpsParams, SortParam};
pub use routes::chirp_routes;
