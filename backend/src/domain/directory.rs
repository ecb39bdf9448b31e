//! Read-side composition of shifts, users and positions.
//!
//! Views are assembled at read time from immutable snapshots, so they always
//! reflect the current user and position records rather than the state at the
//! time a shift was written.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Position, PositionId, Role, Shift, User, UserId};

/// User as exposed to clients, with its position resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserView {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "Admin User")]
    pub name: String,
    #[schema(example = "admin@example.com")]
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// Owner summary embedded in a [`ShiftView`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ShiftOwnerView {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// Shift joined with its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShiftView {
    pub id: String,
    pub user_id: String,
    #[schema(example = "2024-03-01")]
    pub date: String,
    #[schema(example = "09:00")]
    pub start_time: String,
    #[schema(example = "17:00")]
    pub end_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<ShiftOwnerView>,
}

/// Snapshot of users and positions used to resolve references.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    users: IndexMap<UserId, User>,
    positions: IndexMap<PositionId, Position>,
}

impl Directory {
    /// Index the supplied snapshots by id.
    pub fn new(
        users: impl IntoIterator<Item = User>,
        positions: impl IntoIterator<Item = Position>,
    ) -> Self {
        Self {
            users: users
                .into_iter()
                .map(|user| (user.id().clone(), user))
                .collect(),
            positions: positions
                .into_iter()
                .map(|position| (position.id().clone(), position))
                .collect(),
        }
    }

    /// Users in insertion order.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    fn position_of(&self, user: &User) -> Option<Position> {
        user.position_id()
            .and_then(|id| self.positions.get(id))
            .cloned()
    }

    /// Render a user with its current position.
    pub fn user_view(&self, user: &User) -> UserView {
        UserView {
            id: user.id().to_string(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            role: user.role(),
            position: self.position_of(user),
        }
    }

    /// Render a shift with its current owner, if the owner still resolves.
    pub fn shift_view(&self, shift: &Shift) -> ShiftView {
        let audit = shift.audit();
        let user = self.users.get(shift.user_id()).map(|user| ShiftOwnerView {
            id: user.id().to_string(),
            name: user.name().to_string(),
            position: self.position_of(user),
        });
        ShiftView {
            id: shift.id().to_string(),
            user_id: shift.user_id().to_string(),
            date: shift.date().to_string(),
            start_time: shift.window().start().to_string(),
            end_time: shift.window().end().to_string(),
            notes: shift.notes().map(str::to_owned),
            created_by: audit.created().by.to_string(),
            created_at: audit.created().at,
            updated_by: audit.updated().map(|stamp| stamp.by.to_string()),
            updated_at: audit.updated().map(|stamp| stamp.at),
            user,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::{
        AuditStamp, DisplayName, EmailAddress, HexColor, PasswordHash, ShiftDraft, ShiftFields,
        ShiftId,
    };
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    fn position(id: &str, name: &str, color: &str) -> Position {
        Position::new(
            PositionId::new(id).expect("id"),
            name.to_owned(),
            HexColor::new(color).expect("colour"),
        )
    }

    fn user(id: &str, name: &str, position_id: Option<&str>) -> User {
        User::new(
            UserId::new(id).expect("id"),
            DisplayName::new(name).expect("name"),
            EmailAddress::new(format!("{id}@example.com")).expect("email"),
            PasswordHash::new("hash"),
            Role::Employee,
            position_id.map(|raw| PositionId::new(raw).expect("position id")),
        )
    }

    fn shift(id: &str, user_id: &str) -> Shift {
        let draft = ShiftDraft::try_from_fields(ShiftFields {
            user_id: Some(user_id.to_owned()),
            date: Some("2024-03-01".to_owned()),
            start_time: Some("09:00".to_owned()),
            end_time: Some("17:00".to_owned()),
            notes: Some("front desk".to_owned()),
        })
        .expect("valid draft");
        Shift::create(
            ShiftId::new(id).expect("id"),
            draft,
            AuditStamp {
                by: UserId::new("1").expect("id"),
                at: Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).single().expect("time"),
            },
        )
    }

    #[fixture]
    fn directory() -> Directory {
        Directory::new(
            vec![user("10", "Ada", Some("2")), user("11", "Brian", Some("99"))],
            vec![position("2", "Developer", "#10B981")],
        )
    }

    #[rstest]
    fn user_view_resolves_position(directory: Directory) {
        let ada = directory.users().next().expect("first user").clone();
        let view = directory.user_view(&ada);

        assert_eq!(view.position.map(|p| p.name().to_owned()), Some("Developer".to_owned()));
    }

    #[rstest]
    fn dangling_position_is_omitted(directory: Directory) {
        let brian = directory.users().nth(1).expect("second user").clone();
        let value = serde_json::to_value(directory.user_view(&brian)).expect("serialise");

        assert!(value.get("position").is_none());
        assert_eq!(value["role"], "employee");
    }

    #[rstest]
    fn shift_view_joins_owner_and_renders_camel_case(directory: Directory) {
        let value = serde_json::to_value(directory.shift_view(&shift("s1", "10")))
            .expect("serialise");

        assert_eq!(value["userId"], "10");
        assert_eq!(value["startTime"], "09:00");
        assert_eq!(value["endTime"], "17:00");
        assert_eq!(value["createdBy"], "1");
        assert_eq!(value["user"]["name"], "Ada");
        assert_eq!(value["user"]["position"]["color"], "#10B981");
        assert!(value.get("updatedAt").is_none());
    }

    #[rstest]
    fn shift_view_without_owner_has_no_user(directory: Directory) {
        let view = directory.shift_view(&shift("s2", "404"));
        assert!(view.user.is_none());
    }
}
