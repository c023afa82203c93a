//! Chirp body value object: length limit and profanity masking.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::domain::foundation::ValidationError;

/// Maximum body length in characters (Unicode scalar values).
pub const MAX_CHIRP_LENGTH: usize = 140;

/// Replacement written over a denylisted word.
pub const MASK: &str = "****";

static DENYLIST: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "fuck", "ass", "asshole", "bitch", "nigga", "kerfuffle", "sharbert", "fornax",
    ]
    .into_iter()
    .collect()
});

/// A validated, cleaned chirp body.
///
/// Words are split on single spaces; a word whose lowercase form is on the
/// denylist is replaced with `****`. Attached punctuation prevents a match,
/// so `Sharbert!` is kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChirpBody(String);

impl ChirpBody {
    /// Validates and cleans a raw body.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the body is empty or only whitespace
    /// - `TooLong` if the body exceeds [`MAX_CHIRP_LENGTH`] characters
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::empty_field("body"));
        }

        let length = raw.chars().count();
        if length > MAX_CHIRP_LENGTH {
            return Err(ValidationError::too_long("body", MAX_CHIRP_LENGTH, length));
        }

        Ok(Self(clean(raw)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

fn clean(raw: &str) -> String {
    raw.split(' ')
        .map(|word| {
            if DENYLIST.contains(word.to_lowercase().as_str()) {
                MASK
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
