//! UpgradeUserHandler - Billing webhook handler for paid subscriptions.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::user::UserError;
use crate::ports::UserRepository;

/// The only billing event that changes state.
pub const USER_UPGRADED_EVENT: &str = "user.upgraded";

/// A billing event delivered by the payment provider.
#[derive(Debug, Clone)]
pub struct UpgradeUserCommand {
    pub event: String,
    pub user_id: UserId,
}

/// What the handler did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeOutcome {
    Upgraded,
    Ignored,
}

pub struct UpgradeUserHandler {
    users: Arc<dyn UserRepository>,
}

impl UpgradeUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Events other than `user.upgraded` are acknowledged without effect.
    pub async fn handle(&self, cmd: UpgradeUserCommand) -> Result<UpgradeOutcome, UserError> {
        if cmd.event != USER_UPGRADED_EVENT {
            tracing::debug!(event = %cmd.event, "Ignoring billing event");
            return Ok(UpgradeOutcome::Ignored);
        }

        self.users.set_subscription(cmd.user_id, true).await?;
        Ok(UpgradeOutcome::Upgraded)
    }
}
