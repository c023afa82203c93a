//! User module - accounts and subscription state.

mod errors;
#[allow(clippy::module_inception)]
mod user;

pub use errors::UserError;
pub use user::User;
