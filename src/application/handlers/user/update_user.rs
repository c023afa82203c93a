//! UpdateUserHandler - Command handler for changing email and password.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::user::{User, UserError};
use crate::ports::{PasswordHasher, UserRepository};

/// Command to replace the caller's email and password.
#[derive(Clone)]
pub struct UpdateUserCommand {
    pub user_id: UserId,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for UpdateUserCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateUserCommand")
            .field("user_id", &self.user_id)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

pub struct UpdateUserHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UpdateUserHandler {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    pub async fn handle(&self, cmd: UpdateUserCommand) -> Result<User, UserError> {
        let password_hash = self.hasher.hash(&cmd.password).await?;
        let user = self
            .users
            .update(cmd.user_id, &cmd.email, &password_hash)
            .await?;

        tracing::info!(user_id = %user.id, "User updated");
        Ok(user)
    }
}
