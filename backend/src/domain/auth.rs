//! Authentication primitives: login credentials, the authenticated identity
//! carried by bearer tokens, and the outcome of a successful login.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use serde::Serialize;
use utoipa::ToSchema;
use zeroize::Zeroizing;

use crate::domain::{Error, Permission, Role, UserId, UserView};

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Password was blank.
    EmptyPassword,
}

impl LoginValidationError {
    /// Wire name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyEmail => "email",
            Self::EmptyPassword => "password",
        }
    }
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials used by authentication services.
///
/// ## Invariants
/// - `email` is trimmed and must not be empty after trimming.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace to avoid surprising credential comparisons.
///
/// # Examples
/// ```
/// use shiftplan::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("admin@example.com", "admin").unwrap();
/// assert_eq!(creds.email(), "admin@example.com");
/// assert_eq!(creds.password(), "admin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = email.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyEmail);
        }

        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            email: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email used for the exact-match user lookup.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Caller identity decoded from a bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    user_id: UserId,
    email: String,
    role: Role,
}

impl Identity {
    pub fn new(user_id: UserId, email: impl Into<String>, role: Role) -> Self {
        Self {
            user_id,
            email: email.into(),
            role,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Fail with [`crate::domain::ErrorCode::Forbidden`] unless the role
    /// grants `permission`.
    ///
    /// # Examples
    /// ```
    /// use shiftplan::domain::{ErrorCode, Identity, Permission, Role, UserId};
    ///
    /// let employee = Identity::new(UserId::new("9").unwrap(), "e@example.com", Role::Employee);
    /// let err = employee.authorize(Permission::WriteShifts).unwrap_err();
    /// assert_eq!(err.code(), ErrorCode::Forbidden);
    /// ```
    pub fn authorize(&self, permission: Permission) -> Result<(), Error> {
        if self.role.grants(permission) {
            return Ok(());
        }
        tracing::debug!(
            user_id = %self.user_id,
            role = %self.role,
            ?permission,
            "authorization rejected"
        );
        Err(Error::forbidden(format!(
            "role {} may not {}",
            self.role,
            describe(permission)
        )))
    }
}

fn describe(permission: Permission) -> &'static str {
    match permission {
        Permission::ReadShifts => "read shifts",
        Permission::WriteShifts => "modify shifts",
        Permission::ManageUsers => "manage users",
        Permission::ManagePositions => "manage positions",
    }
}

/// Signed bearer token handed to clients.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<AccessToken> for String {
    fn from(value: AccessToken) -> Self {
        value.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(..)")
    }
}

/// Successful login: a token plus the user it identifies.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginOutcome {
    #[schema(value_type = String)]
    #[serde(serialize_with = "serialize_token")]
    pub token: AccessToken,
    pub user: UserView,
}

fn serialize_token<S>(token: &AccessToken, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(token.as_ref())
}
