//! Request and response bodies for chirp endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::chirp::{ListChirpsQuery, SortOrder};
use crate::domain::chirp::Chirp;
use crate::domain::foundation::UserId;

/// Body of `POST /api/chirps`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChirpRequest {
    pub body: String,
}

/// Sort direction accepted in `?sort=`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortParam {
    #[default]
    Asc,
    Desc,
}

/// Query string of `GET /api/chirps`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListChirpsParams {
    pub author_id: Option<u64>,
    #[serde(default)]
    pub sort: SortParam,
}

impl From<ListChirpsParams> for ListChirpsQuery {
    fn from(params: ListChirpsParams) -> Self {
        Self {
            author_id: params.author_id.map(UserId::new),
            order: match params.sort {
                SortParam::Asc => SortOrder::Ascending,
                SortParam::Desc => SortOrder::Descending,
            },
        }
    }
}

/// A chirp as clients see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChirpResponse {
    pub id: u64,
    pub body: String,
    pub author_id: u64,
}

impl From<Chirp> for ChirpResponse {
    fn from(chirp: Chirp) -> Self {
        Self {
            id: chirp.id.as_u64(),
            body: chirp.body,
            author_id: chirp.author_id.as_u64(),
        }
    }
}
