//! User repository backed by a record store.

use async_trait::async_trait;

use crate::domain::foundation::{RepositoryError, UserId};
use crate::domain::user::User;
use crate::ports::{RecordStore, UserRepository};

/// Stores users in the `users` collection of the document.
#[derive(Debug, Clone)]
pub struct DocumentUserRepository<S> {
    store: S,
}

impl<S: RecordStore> DocumentUserRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: RecordStore> UserRepository for DocumentUserRepository<S> {
    async fn create(&self, email: &str, password_hash: &str) -> Result<User, RepositoryError> {
        let email = email.to_string();
        let password_hash = password_hash.to_string();

        let user = self
            .store
            .update(move |doc| {
                if doc.user_by_email(&email).is_some() {
                    return Err(RepositoryError::duplicate("user", "email", email));
                }

                let id = doc.next_user_id();
                let user = User::new(id, email, password_hash);
                doc.users.insert(id, user.clone());
                Ok(user)
            })
            .await?;

        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    async fn update(
        &self,
        id: UserId,
        email: &str,
        password_hash: &str,
    ) -> Result<User, RepositoryError> {
        let email = email.to_string();
        let password_hash = password_hash.to_string();

        self.store
            .update(move |doc| {
                if !doc.users.contains_key(&id) {
                    return Err(RepositoryError::not_found("user", id));
                }
                if doc
                    .users
                    .values()
                    .any(|other| other.id != id && other.has_email(&email))
                {
                    return Err(RepositoryError::duplicate("user", "email", email));
                }

                let user = doc
                    .users
                    .get_mut(&id)
                    .ok_or_else(|| RepositoryError::not_found("user", id))?;
                user.email = email;
                user.password_hash = password_hash;
                Ok(user.clone())
            })
            .await
    }

    async fn get_by_email(&self, email: &str) -> Result<User, RepositoryError> {
        let document = self.store.load().await?;
        document
            .user_by_email(email)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("user", email))
    }

    async fn get_by_id(&self, id: UserId) -> Result<User, RepositoryError> {
        let mut document = self.store.load().await?;
        document
            .users
            .remove(&id)
            .ok_or_else(|| RepositoryError::not_found("user", id))
    }

    async fn set_subscription(&self, id: UserId, subscribed: bool) -> Result<(), RepositoryError> {
        self.store
            .update(move |doc| {
                let user = doc
                    .users
                    .get_mut(&id)
                    .ok_or_else(|| RepositoryError::not_found("user", id))?;
                user.is_chirpy_red = subscribed;
                Ok::<_, RepositoryError>(())
            })
            .await?;

        tracing::info!(user_id = %id, subscribed, "Subscription updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryRecordStore;

    fn repo() -> DocumentUserRepository<InMemoryRecordStore> {
        DocumentUserRepository::new(InMemoryRecordStore::new())
    }

    #[tokio::test]
    async fn create_assigns_ids_and_clears_subscription() {
        let repo = repo();

        let first = repo.create("a@x.com", "h1").await.unwrap();
        let second = repo.create("b@x.com", "h2").await.unwrap();

        assert_eq!(first.id, UserId::new(1));
        assert_eq!(second.id, UserId::new(2));
        assert!(!first.is_chirpy_red);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let repo = repo();
        repo.create("a@x.com", "h").await.unwrap();

        let err = repo.create("a@x.com", "h").await.unwrap_err();

        assert!(err.is_duplicate());
    }

    #[tokio::test]
    async fn email_match_is_case_sensitive() {
        let repo = repo();
        repo.create("a@x.com", "h").await.unwrap();

        let other = repo.create("A@x.com", "h").await.unwrap();

        assert_eq!(other.id, UserId::new(2));
    }

    #[tokio::test]
    async fn rejected_create_does_not_consume_an_id() {
        let repo = repo();
        repo.create("a@x.com", "h").await.unwrap();
        repo.create("a@x.com", "h").await.unwrap_err();

        let next = repo.create("b@x.com", "h").await.unwrap();

        assert_eq!(next.id, UserId::new(2));
    }

    #[tokio::test]
    async fn get_by_email_requires_exact_match() {
        let repo = repo();
        let user = repo.create("a@x.com", "h").await.unwrap();

        assert_eq!(repo.get_by_email("a@x.com").await.unwrap(), user);
        assert!(repo.get_by_email("A@X.COM").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn update_replaces_email_and_hash() {
        let repo = repo();
        let user = repo.create("a@x.com", "old").await.unwrap();

        let updated = repo.update(user.id, "new@x.com", "new").await.unwrap();

        assert_eq!(updated.email, "new@x.com");
        assert_eq!(updated.password_hash, "new");
        assert_eq!(repo.get_by_id(user.id).await.unwrap(), updated);
        assert!(repo.get_by_email("a@x.com").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn update_to_own_email_is_allowed() {
        let repo = repo();
        let user = repo.create("a@x.com", "old").await.unwrap();

        let updated = repo.update(user.id, "a@x.com", "new").await.unwrap();

        assert_eq!(updated.password_hash, "new");
    }

    #[tokio::test]
    async fn update_to_another_users_email_is_duplicate() {
        let repo = repo();
        repo.create("a@x.com", "h").await.unwrap();
        let bob = repo.create("b@x.com", "h").await.unwrap();

        let err = repo.update(bob.id, "a@x.com", "h").await.unwrap_err();

        assert!(err.is_duplicate());
        assert_eq!(repo.get_by_id(bob.id).await.unwrap().email, "b@x.com");
    }

    #[tokio::test]
    async fn update_of_missing_user_is_not_found() {
        let err = repo().update(UserId::new(7), "a@x.com", "h").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn set_subscription_flips_flag() {
        let repo = repo();
        let user = repo.create("a@x.com", "h").await.unwrap();

        repo.set_subscription(user.id, true).await.unwrap();

        assert!(repo.get_by_id(user.id).await.unwrap().is_chirpy_red);
    }

    #[tokio::test]
    async fn set_subscription_of_missing_user_is_not_found() {
        let err = repo().set_subscription(UserId::new(3), true).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
