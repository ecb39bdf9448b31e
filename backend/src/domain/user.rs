//! User data model.
//!
//! Users are created by administrators and never deleted. The stored password
//! hash never leaves the domain: adapters render [`crate::domain::UserView`]
//! instead of [`User`].

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use zeroize::Zeroizing;

use crate::domain::identifier::opaque_id;
use crate::domain::{FieldViolation, PositionId, Role, Violations};

opaque_id! {
    /// Stable user identifier.
    UserId
}

/// Validation errors for user fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyDisplayName,
    InvalidEmail,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDisplayName => write!(f, "name must not be empty"),
            Self::InvalidEmail => write!(f, "email must look like local@domain"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Human readable name for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    /// Validate and construct a [`DisplayName`].
    pub fn new(display_name: impl Into<String>) -> Result<Self, UserValidationError> {
        let display_name = display_name.into();
        if display_name.trim().is_empty() {
            return Err(UserValidationError::EmptyDisplayName);
        }
        Ok(Self(display_name))
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Login key for a user. Compared exactly, without case folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    ///
    /// # Examples
    /// ```
    /// use shiftplan::domain::EmailAddress;
    ///
    /// assert!(EmailAddress::new("admin@example.com").is_ok());
    /// assert!(EmailAddress::new("a@b@c").is_err());
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let email = email.into();
        if !email_regex().is_match(&email) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Encoded password hash produced by a [`crate::domain::ports::PasswordHasher`].
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an encoded hash.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }
}

impl AsRef<str> for PasswordHash {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

/// Application user.
///
/// ## Invariants
/// - `email` is unique across the store.
/// - `position_id`, when present, referenced an existing position at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: DisplayName,
    email: EmailAddress,
    password_hash: PasswordHash,
    role: Role,
    position_id: Option<PositionId>,
}

impl User {
    /// Build a user from validated components.
    pub fn new(
        id: UserId,
        name: DisplayName,
        email: EmailAddress,
        password_hash: PasswordHash,
        role: Role,
        position_id: Option<PositionId>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            role,
            position_id,
        }
    }

    /// Build a user from a validated draft and its freshly computed hash.
    pub fn from_draft(id: UserId, draft: UserDraft, password_hash: PasswordHash) -> Self {
        let UserDraft {
            name,
            email,
            role,
            position_id,
            ..
        } = draft;
        Self::new(id, name, email, password_hash, role, position_id)
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Stored hash used to verify login attempts.
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn position_id(&self) -> Option<&PositionId> {
        self.position_id.as_ref()
    }
}

/// Raw user creation input as received from an adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUserFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub position_id: Option<String>,
}

/// Validated user creation request awaiting a password hash.
#[derive(Debug, Clone)]
pub struct UserDraft {
    name: DisplayName,
    email: EmailAddress,
    password: Zeroizing<String>,
    role: Role,
    position_id: Option<PositionId>,
}

impl UserDraft {
    /// Validate every field, reporting all violations together.
    ///
    /// A blank `position_id` means "no position".
    pub fn try_from_fields(fields: NewUserFields) -> Result<Self, Violations> {
        let mut violations = Violations::new();

        let name = violations.check(
            required("name", fields.name).and_then(|raw| {
                DisplayName::new(raw).map_err(|err| {
                    FieldViolation::new("name", "empty_name", err.to_string())
                })
            }),
        );
        let email = violations.check(
            required("email", fields.email).and_then(|raw| {
                EmailAddress::new(raw).map_err(|err| {
                    FieldViolation::new("email", "invalid_email", err.to_string())
                })
            }),
        );
        let password = violations.check(required("password", fields.password).and_then(
            |raw| {
                if raw.is_empty() {
                    Err(FieldViolation::new(
                        "password",
                        "empty_password",
                        "password must not be empty",
                    ))
                } else {
                    Ok(Zeroizing::new(raw))
                }
            },
        ));
        let role = violations.check(required("role", fields.role).and_then(|raw| {
            raw.parse::<Role>().map_err(|_| {
                FieldViolation::new(
                    "role",
                    "invalid_role",
                    "role must be one of admin, manager, employee",
                )
            })
        }));
        let position_id = violations.check(
            match fields.position_id.filter(|raw| !raw.trim().is_empty()) {
                None => Ok(None),
                Some(raw) => PositionId::new(raw).map(Some).map_err(|err| {
                    FieldViolation::new("position_id", "invalid_position_id", err.to_string())
                }),
            },
        );

        match (name, email, password, role, position_id) {
            (Some(name), Some(email), Some(password), Some(role), Some(position_id))
                if violations.is_empty() =>
            {
                Ok(Self {
                    name,
                    email,
                    password,
                    role,
                    position_id,
                })
            }
            _ => Err(violations),
        }
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Plain-text password to hash before storage.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn position_id(&self) -> Option<&PositionId> {
        self.position_id.as_ref()
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, FieldViolation> {
    value.ok_or_else(|| FieldViolation::new(field, "missing", format!("{field} is required")))
}

#[cfg(test)]
mod tests;
