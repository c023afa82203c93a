//! Shared application state.

use std::sync::Arc;

use secrecy::SecretString;

use crate::adapters::auth::{BcryptPasswordHasher, JwtTokenService};
use crate::adapters::storage::{
    DocumentChirpRepository, DocumentRevocationRepository, DocumentUserRepository,
};
use crate::application::handlers::chirp::{
    CreateChirpHandler, DeleteChirpHandler, GetChirpHandler, ListChirpsHandler,
};
use crate::application::handlers::session::{
    LoginHandler, RefreshHandler, RevokeHandler, TokenLifetimes,
};
use crate::application::handlers::user::{
    CreateUserHandler, UpdateUserHandler, UpgradeUserHandler,
};
use crate::config::AppConfig;
use crate::ports::{
    ChirpRepository, PasswordHasher, RecordStore, RevocationRepository, TokenService,
    UserRepository,
};

use super::middleware::HitCounter;

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped dependencies
/// for efficient sharing across handlers.
#[derive(Clone)]
pub struct AppState {
    pub chirps: Arc<dyn ChirpRepository>,
    pub users: Arc<dyn UserRepository>,
    pub revocations: Arc<dyn RevocationRepository>,
    pub tokens: Arc<dyn TokenService>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub hits: Arc<HitCounter>,
    pub lifetimes: TokenLifetimes,
    /// Key billing webhooks must present; unchecked when `None`.
    pub webhook_key: Option<SecretString>,
}

impl AppState {
    /// Wires every repository to one record store and the auth adapters to
    /// the configured secret and cost.
    pub fn with_store<S>(store: S, config: &AppConfig) -> Self
    where
        S: RecordStore + Clone + 'static,
    {
        Self {
            chirps: Arc::new(DocumentChirpRepository::new(store.clone())),
            users: Arc::new(DocumentUserRepository::new(store.clone())),
            revocations: Arc::new(DocumentRevocationRepository::new(store)),
            tokens: Arc::new(JwtTokenService::new(&config.auth.jwt_secret)),
            hasher: Arc::new(BcryptPasswordHasher::new(config.auth.bcrypt_cost)),
            hits: Arc::new(HitCounter::new()),
            lifetimes: TokenLifetimes {
                access: config.auth.access_token_ttl(),
                refresh: config.auth.refresh_token_ttl(),
            },
            webhook_key: config.payment.polka_api_key.clone(),
        }
    }

    /// Create handlers on demand from the shared state.
    pub fn create_chirp_handler(&self) -> CreateChirpHandler {
        CreateChirpHandler::new(self.chirps.clone())
    }

    pub fn delete_chirp_handler(&self) -> DeleteChirpHandler {
        DeleteChirpHandler::new(self.chirps.clone())
    }

    pub fn get_chirp_handler(&self) -> GetChirpHandler {
        GetChirpHandler::new(self.chirps.clone())
    }

    pub fn list_chirps_handler(&self) -> ListChirpsHandler {
        ListChirpsHandler::new(self.chirps.clone())
    }

    pub fn create_user_handler(&self) -> CreateUserHandler {
        CreateUserHandler::new(self.users.clone(), self.hasher.clone())
    }

    pub fn update_user_handler(&self) -> UpdateUserHandler {
        UpdateUserHandler::new(self.users.clone(), self.hasher.clone())
    }

    pub fn upgrade_user_handler(&self) -> UpgradeUserHandler {
        UpgradeUserHandler::new(self.users.clone())
    }

    pub fn login_handler(&self) -> LoginHandler {
        LoginHandler::new(
            self.users.clone(),
            self.hasher.clone(),
            self.tokens.clone(),
            self.lifetimes,
        )
    }

    pub fn refresh_handler(&self) -> RefreshHandler {
        RefreshHandler::new(
            self.tokens.clone(),
            self.revocations.clone(),
            self.lifetimes.access,
        )
    }

    pub fn revoke_handler(&self) -> RevokeHandler {
        RevokeHandler::new(self.tokens.clone(), self.revocations.clone())
    }
}
