//! User repository port.

use async_trait::async_trait;

use crate::domain::foundation::{RepositoryError, UserId};
use crate::domain::user::User;

/// Persistence for user accounts.
///
/// Emails are unique, compared case-sensitively. The check runs on create
/// and again on update, excluding the user being updated.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user with the subscription flag cleared.
    ///
    /// # Errors
    ///
    /// - `Duplicate` if another user already has `email`
    async fn create(&self, email: &str, password_hash: &str) -> Result<User, RepositoryError>;

    /// Replaces a user's email and password hash.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the user does not exist
    /// - `Duplicate` if a different user already has `email`
    async fn update(
        &self,
        id: UserId,
        email: &str,
        password_hash: &str,
    ) -> Result<User, RepositoryError>;

    /// # Errors
    ///
    /// - `NotFound` if no user has exactly this email
    async fn get_by_email(&self, email: &str) -> Result<User, RepositoryError>;

    /// # Errors
    ///
    /// - `NotFound` if the user does not exist
    async fn get_by_id(&self, id: UserId) -> Result<User, RepositoryError>;

    /// Sets or clears the paid-subscription flag.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the user does not exist
    async fn set_subscription(&self, id: UserId, subscribed: bool) -> Result<(), RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn UserRepository) {}
    }
}
