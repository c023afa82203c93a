//! Shared fixtures for handler tests.

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;

use crate::adapters::auth::{BcryptPasswordHasher, JwtTokenService};
use crate::adapters::storage::{
    DocumentChirpRepository, DocumentRevocationRepository, DocumentUserRepository,
    InMemoryRecordStore,
};
use crate::application::handlers::session::TokenLifetimes;
use crate::ports::{
    ChirpRepository, PasswordHasher, RevocationRepository, TokenService, UserRepository,
};

/// Collaborators wired to one in-memory document.
pub(crate) struct Fixture {
    pub chirps: Arc<dyn ChirpRepository>,
    pub users: Arc<dyn UserRepository>,
    pub revocations: Arc<dyn RevocationRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub tokens: Arc<dyn TokenService>,
    pub lifetimes: TokenLifetimes,
}

impl Fixture {
    pub fn new() -> Self {
        let store = InMemoryRecordStore::new();
        Self {
            chirps: Arc::new(DocumentChirpRepository::new(store.clone())),
            users: Arc::new(DocumentUserRepository::new(store.clone())),
            revocations: Arc::new(DocumentRevocationRepository::new(store)),
            hasher: Arc::new(BcryptPasswordHasher::new(4)),
            tokens: Arc::new(JwtTokenService::new(&SecretString::new(
                "handler-test-secret-with-enough-bytes".to_string(),
            ))),
            lifetimes: TokenLifetimes {
                access: Duration::from_secs(3600),
                refresh: Duration::from_secs(60 * 24 * 3600),
            },
        }
    }
}
