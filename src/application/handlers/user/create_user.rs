//! CreateUserHandler - Command handler for registration.

use std::sync::Arc;

use crate::domain::user::{User, UserError};
use crate::ports::{PasswordHasher, UserRepository};

/// Command to register a new account.
#[derive(Clone)]
pub struct CreateUserCommand {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for CreateUserCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserCommand")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Handler for registering users.
pub struct CreateUserHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl CreateUserHandler {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    pub async fn handle(&self, cmd: CreateUserCommand) -> Result<User, UserError> {
        let password_hash = self.hasher.hash(&cmd.password).await?;
        Ok(self.users.create(&cmd.email, &password_hash).await?)
    }
}
