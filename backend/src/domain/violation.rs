//! Field-level validation failures collected across a whole payload.
//!
//! Validation never stops at the first bad field: constructors push every
//! failure into [`Violations`] and report them together so clients can fix a
//! form in one round trip.

use std::fmt;

use serde::Serialize;
use serde_json::json;

use crate::domain::Error;

/// One rejected field with a stable code and a readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    field: &'static str,
    code: &'static str,
    message: String,
}

impl FieldViolation {
    /// Describe a rejected field.
    pub fn new(field: &'static str, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            code,
            message: message.into(),
        }
    }

    /// Wire name of the rejected field.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Stable machine-readable violation code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Human-readable explanation.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered collection of violations for a single payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    /// Start an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation.
    pub fn push(&mut self, violation: FieldViolation) {
        self.0.push(violation);
    }

    /// Record the error half of a field parse, returning the parsed value.
    pub fn check<T>(&mut self, result: Result<T, FieldViolation>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(violation) => {
                self.push(violation);
                None
            }
        }
    }

    /// Whether nothing was rejected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Rejected fields in the order they were checked.
    pub fn as_slice(&self) -> &[FieldViolation] {
        self.0.as_slice()
    }

    /// Names of the rejected fields.
    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(FieldViolation::field).collect()
    }

    /// Convert into an `invalid_request` error listing every violation.
    pub fn into_error(self, message: &str) -> Error {
        Error::invalid_request(message).with_details(json!({ "violations": self.0 }))
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}
