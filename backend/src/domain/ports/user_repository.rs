//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Backing store could not be read or written.
        Unavailable { message: String } => "user repository unavailable: {message}",
    }
}

/// Result of an atomic user insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInsert {
    /// The user was stored.
    Stored,
    /// Another user already holds the email.
    EmailTaken,
    /// The referenced position does not exist.
    UnknownPosition,
}

/// Port for reading and creating users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in insertion order.
    async fn list_users(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Fetch a user by exact email match.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError>;

    /// Store `user` unless its email is taken or its position is unknown.
    ///
    /// Both checks and the write happen atomically.
    async fn insert(&self, user: User) -> Result<UserInsert, UserRepositoryError>;
}
