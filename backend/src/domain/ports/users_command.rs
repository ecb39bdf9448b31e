//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, Identity, NewUserFields, UserView};

/// Domain use-case port for creating users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Validate, hash the password, and store a new user. Admin only.
    async fn create_user(&self, caller: &Identity, fields: NewUserFields)
    -> Result<UserView, Error>;
}
