//! Login domain service.
//!
//! Looks users up by exact email, verifies the password against the stored
//! hash, and issues a bearer token carrying the user's id, email and role.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    LoginService, PasswordHasher, PositionRepository, PositionRepositoryError, TokenCodec,
    UserRepository, UserRepositoryError,
};
use crate::domain::{Directory, Error, Identity, LoginCredentials, LoginOutcome};

const INVALID_CREDENTIALS: &str = "invalid credentials";

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

/// Authentication service implementing [`LoginService`].
#[derive(Clone)]
pub struct AuthService<U, P, H, T> {
    users: Arc<U>,
    positions: Arc<P>,
    hasher: Arc<H>,
    tokens: Arc<T>,
}

impl<U, P, H, T> AuthService<U, P, H, T> {
    /// Create a new login service.
    pub fn new(users: Arc<U>, positions: Arc<P>, hasher: Arc<H>, tokens: Arc<T>) -> Self {
        Self {
            users,
            positions,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<U, P, H, T> LoginService for AuthService<U, P, H, T>
where
    U: UserRepository,
    P: PositionRepository,
    H: PasswordHasher + 'static,
    T: TokenCodec,
{
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginOutcome, Error> {
        let Some(user) = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(map_user_error)?
        else {
            tracing::debug!("login rejected: unknown email");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        };

        // bcrypt is CPU-bound; keep it off the async workers.
        let hasher = Arc::clone(&self.hasher);
        let password = credentials.password().to_owned();
        let stored = user.password_hash().clone();
        let verified = tokio::task::spawn_blocking(move || hasher.verify(&password, &stored))
            .await
            .map_err(|err| Error::internal(format!("password check task failed: {err}")))?
            .map_err(|err| Error::internal(err.to_string()))?;
        if !verified {
            tracing::debug!(user_id = %user.id(), "login rejected: password mismatch");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        }

        let identity = Identity::new(user.id().clone(), user.email().as_ref(), user.role());
        let token = self
            .tokens
            .issue(&identity)
            .map_err(|err| Error::internal(err.to_string()))?;

        let position = match user.position_id() {
            Some(id) => self
                .positions
                .find_by_id(id)
                .await
                .map_err(map_position_error)?,
            None => None,
        };
        let view = Directory::new([user.clone()], position).user_view(&user);

        tracing::info!(user_id = %user.id(), role = %user.role(), "user logged in");
        Ok(LoginOutcome { token, user: view })
    }
}

#[cfg(test)]
#[path = "auth_service_tests.rs"]
mod tests;
