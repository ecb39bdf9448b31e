//! User directory domain service.
//!
//! Lists users with their current position and lets administrators create
//! new users. Passwords are hashed before they reach the repository.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    PasswordHasher, PositionRepository, PositionRepositoryError, UserInsert, UserRepository,
    UserRepositoryError, UsersCommand, UsersQuery,
};
use crate::domain::{
    Directory, Error, Identity, NewUserFields, Permission, User, UserDraft, UserId, UserView,
};

fn map_user_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Unavailable { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

fn map_position_error(error: PositionRepositoryError) -> Error {
    match error {
        PositionRepositoryError::Unavailable { message } => {
            Error::internal(format!("position repository error: {message}"))
        }
    }
}

/// User directory service implementing [`UsersQuery`] and [`UsersCommand`].
#[derive(Clone)]
pub struct UserDirectoryService<U, P, H> {
    users: Arc<U>,
    positions: Arc<P>,
    hasher: Arc<H>,
}

impl<U, P, H> UserDirectoryService<U, P, H> {
    /// Create a new directory service.
    pub fn new(users: Arc<U>, positions: Arc<P>, hasher: Arc<H>) -> Self {
        Self {
            users,
            positions,
            hasher,
        }
    }
}

impl<U, P, H> UserDirectoryService<U, P, H>
where
    U: UserRepository,
    P: PositionRepository,
{
    async fn directory(&self) -> Result<Directory, Error> {
        let users = self.users.list_users().await.map_err(map_user_error)?;
        let positions = self
            .positions
            .list_positions()
            .await
            .map_err(map_position_error)?;
        Ok(Directory::new(users, positions))
    }

    async fn view_of(&self, user: &User) -> Result<UserView, Error> {
        let position = match user.position_id() {
            Some(id) => self
                .positions
                .find_by_id(id)
                .await
                .map_err(map_position_error)?,
            None => None,
        };
        Ok(Directory::new([user.clone()], position).user_view(user))
    }
}

#[async_trait]
impl<U, P, H> UsersQuery for UserDirectoryService<U, P, H>
where
    U: UserRepository,
    P: PositionRepository,
    H: Send + Sync,
{
    async fn list_users(&self, caller: &Identity) -> Result<Vec<UserView>, Error> {
        let directory = self.directory().await?;
        tracing::debug!(caller = %caller.user_id(), "listing users");
        Ok(directory
            .users()
            .map(|user| directory.user_view(user))
            .collect())
    }
}

#[async_trait]
impl<U, P, H> UsersCommand for UserDirectoryService<U, P, H>
where
    U: UserRepository,
    P: PositionRepository,
    H: PasswordHasher + 'static,
{
    async fn create_user(
        &self,
        caller: &Identity,
        fields: NewUserFields,
    ) -> Result<UserView, Error> {
        caller.authorize(Permission::ManageUsers)?;
        let draft = UserDraft::try_from_fields(fields)
            .map_err(|violations| violations.into_error("invalid user"))?;

        // bcrypt is CPU-bound; keep it off the async workers.
        let hasher = Arc::clone(&self.hasher);
        let password = draft.password().to_owned();
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|err| Error::internal(format!("password hashing task failed: {err}")))?
            .map_err(|err| Error::internal(err.to_string()))?;
        let email = draft.email().clone();
        let position_id = draft.position_id().cloned();
        let user = User::from_draft(UserId::random(), draft, password_hash);

        match self
            .users
            .insert(user.clone())
            .await
            .map_err(map_user_error)?
        {
            UserInsert::Stored => {
                tracing::info!(
                    user_id = %user.id(),
                    role = %user.role(),
                    created_by = %caller.user_id(),
                    "user created"
                );
                self.view_of(&user).await
            }
            UserInsert::EmailTaken => Err(Error::conflict(format!(
                "a user with email {email} already exists"
            ))),
            UserInsert::UnknownPosition => Err(Error::not_found(format!(
                "position {} not found",
                position_id.map(|id| id.to_string()).unwrap_or_default()
            ))),
        }
    }
}

#[cfg(test)]
#[path = "user_directory_service_tests.rs"]
mod tests;
