//! Roles and the permission policy attached to them.
//!
//! The role set is closed. Every policy decision is an exhaustive `match`, so
//! adding a role forces each rule to be revisited.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role carried by every user and embedded in issued tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Employee,
}

/// Action gated by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Read shifts, possibly restricted to the caller's own.
    ReadShifts,
    /// Create, update or delete any shift.
    WriteShifts,
    /// Create users.
    ManageUsers,
    /// Create, update or delete positions.
    ManagePositions,
}

impl Role {
    /// Whether this role may perform `permission`.
    pub fn grants(self, permission: Permission) -> bool {
        match (self, permission) {
            (Self::Admin, _) => true,
            (Self::Manager, Permission::ReadShifts | Permission::WriteShifts) => true,
            (Self::Manager, Permission::ManageUsers | Permission::ManagePositions) => false,
            (Self::Employee, Permission::ReadShifts) => true,
            (
                Self::Employee,
                Permission::WriteShifts | Permission::ManageUsers | Permission::ManagePositions,
            ) => false,
        }
    }

    /// Whether shift reads are confined to the caller's own shifts.
    pub fn sees_only_own_shifts(self) -> bool {
        match self {
            Self::Admin | Self::Manager => false,
            Self::Employee => true,
        }
    }

    /// Lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Employee => "employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role `{}`", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "employee" => Ok(Self::Employee),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}
