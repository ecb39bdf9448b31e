//! Positions: named, coloured job categories that users may belong to.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::identifier::opaque_id;
use crate::domain::{FieldViolation, Violations};

opaque_id! {
    /// Stable position identifier.
    PositionId
}

static COLOR_RE: OnceLock<Regex> = OnceLock::new();

fn color_regex() -> &'static Regex {
    COLOR_RE.get_or_init(|| {
        Regex::new("^#[0-9A-Fa-f]{6}$")
            .unwrap_or_else(|error| panic!("colour regex failed to compile: {error}"))
    })
}

/// `#RRGGBB` colour, stored as supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexColor(String);

impl HexColor {
    /// Validate a `#RRGGBB` colour string.
    pub fn new(raw: impl Into<String>) -> Result<Self, FieldViolation> {
        let raw = raw.into();
        if !color_regex().is_match(&raw) {
            return Err(FieldViolation::new(
                "color",
                "invalid_color",
                "color must be a #RRGGBB hex colour",
            ));
        }
        Ok(Self(raw))
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Position as stored and rendered.
///
/// # Examples
/// ```
/// use shiftplan::domain::{HexColor, Position, PositionId};
///
/// let position = Position::new(
///     PositionId::new("2").unwrap(),
///     "Developer".to_owned(),
///     HexColor::new("#10B981").unwrap(),
/// );
/// assert_eq!(position.name(), "Developer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Position {
    #[schema(value_type = String, example = "2")]
    id: PositionId,
    #[schema(example = "Developer")]
    name: String,
    #[schema(value_type = String, example = "#10B981")]
    #[serde(serialize_with = "serialize_color")]
    color: HexColor,
}

fn serialize_color<S>(color: &HexColor, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(color.as_ref())
}

impl Position {
    pub fn new(id: PositionId, name: String, color: HexColor) -> Self {
        Self { id, name, color }
    }

    /// Combine an identifier with validated fields.
    pub fn from_draft(id: PositionId, draft: PositionDraft) -> Self {
        Self::new(id, draft.name, draft.color)
    }

    pub fn id(&self) -> &PositionId {
        &self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn color(&self) -> &HexColor {
        &self.color
    }
}

/// Raw position input as received from an adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionFields {
    pub name: Option<String>,
    pub color: Option<String>,
}

/// Validated position fields for create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionDraft {
    name: String,
    color: HexColor,
}

impl PositionDraft {
    /// Validate both fields, reporting all violations together.
    pub fn try_from_fields(fields: PositionFields) -> Result<Self, Violations> {
        let mut violations = Violations::new();

        let name = violations.check(match fields.name {
            None => Err(FieldViolation::new("name", "missing", "name is required")),
            Some(raw) if raw.trim().is_empty() => Err(FieldViolation::new(
                "name",
                "empty_name",
                "name must not be empty",
            )),
            Some(raw) => Ok(raw),
        });
        let color = violations.check(match fields.color {
            None => Err(FieldViolation::new("color", "missing", "color is required")),
            Some(raw) => HexColor::new(raw),
        });

        match (name, color) {
            (Some(name), Some(color)) => Ok(Self { name, color }),
            _ => Err(violations),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn color(&self) -> &HexColor {
        &self.color
    }
}
