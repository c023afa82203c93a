//! User command handlers.

mod create_user;
mod update_user;
mod upgrade_user;

pub use create_user::{CreateUserCommand, CreateUserHandler};
pub use update_user::{UpdateUserCommand, UpdateUserHandler};
pub use upgrade_user::{UpgradeOutcome, UpgradeUserCommand, UpgradeUserHandler, USER_UPGRADED_EVENT};
