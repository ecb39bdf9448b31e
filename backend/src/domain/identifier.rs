//! Opaque string identifiers shared by users, positions and shifts.
//!
//! Seed records use short numeric ids while new records receive UUID v4
//! strings, so identifiers are validated only for presence and surrounding
//! whitespace.

use std::fmt;

/// Validation errors returned by identifier constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdValidationError {
    /// Identifier was empty.
    Empty,
    /// Identifier carried leading or trailing whitespace.
    Padded,
}

impl fmt::Display for IdValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "identifier must not be empty"),
            Self::Padded => write!(f, "identifier must not contain surrounding whitespace"),
        }
    }
}

impl std::error::Error for IdValidationError {}

pub(crate) fn validate_id(raw: &str) -> Result<(), IdValidationError> {
    if raw.is_empty() {
        return Err(IdValidationError::Empty);
    }
    if raw.trim() != raw {
        return Err(IdValidationError::Padded);
    }
    Ok(())
}

macro_rules! opaque_id {
    ($(#[$outer:meta])* $name:ident) => {
        $(#[$outer])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validate and construct the identifier.
            pub fn new(
                id: impl Into<String>,
            ) -> Result<Self, $crate::domain::IdValidationError> {
                let id = id.into();
                $crate::domain::identifier::validate_id(&id)?;
                Ok(Self(id))
            }

            /// Generate a fresh random identifier.
            pub fn random() -> Self {
                Self(::uuid::Uuid::new_v4().to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.0.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::domain::IdValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

pub(crate) use opaque_id;
