//! Shared builders for domain service tests.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::domain::{
    DisplayName, EmailAddress, HexColor, Identity, PasswordHash, Position, PositionId, Role,
    User, UserId,
};

pub(crate) fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

pub(crate) fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: fixture_timestamp(),
    })
}

pub(crate) fn caller(id: &str, role: Role) -> Identity {
    Identity::new(
        UserId::new(id).expect("fixture user id"),
        format!("{id}@example.com"),
        role,
    )
}

pub(crate) fn position(id: &str, name: &str, color: &str) -> Position {
    Position::new(
        PositionId::new(id).expect("fixture position id"),
        name.to_owned(),
        HexColor::new(color).expect("fixture colour"),
    )
}

pub(crate) fn user(id: &str, name: &str, role: Role, position_id: Option<&str>) -> User {
    User::new(
        UserId::new(id).expect("fixture user id"),
        DisplayName::new(name).expect("fixture name"),
        EmailAddress::new(format!("{id}@example.com")).expect("fixture email"),
        PasswordHash::new(format!("hash-of-{id}")),
        role,
        position_id.map(|raw| PositionId::new(raw).expect("fixture position id")),
    )
}
