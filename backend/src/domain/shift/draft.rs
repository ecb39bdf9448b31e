//! Validation of raw shift input into a [`ShiftDraft`].

use crate::domain::{FieldViolation, UserId, Violations};

use super::{ClockTime, ShiftDate, TimeWindow};

/// Raw shift input as received from an adapter.
///
/// Every field is optional so that absent values are reported alongside
/// malformed ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftFields {
    pub user_id: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub notes: Option<String>,
}

/// Validated mutable fields of a shift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftDraft {
    user_id: UserId,
    date: ShiftDate,
    window: TimeWindow,
    notes: Option<String>,
}

impl ShiftDraft {
    /// Validate all fields, reporting every violation together.
    ///
    /// # Examples
    /// ```
    /// use shiftplan::domain::{ShiftDraft, ShiftFields};
    ///
    /// let violations = ShiftDraft::try_from_fields(ShiftFields {
    ///     user_id: Some("1".into()),
    ///     date: Some("2024-3-1".into()),
    ///     start_time: Some("25:00".into()),
    ///     end_time: Some("12:00".into()),
    ///     notes: None,
    /// })
    /// .unwrap_err();
    /// assert_eq!(violations.fields(), vec!["date", "startTime"]);
    /// ```
    pub fn try_from_fields(fields: ShiftFields) -> Result<Self, Violations> {
        let mut violations = Violations::new();

        let user_id = violations.check(match fields.user_id {
            None => Err(missing("userId")),
            Some(raw) => UserId::new(raw)
                .map_err(|err| FieldViolation::new("userId", "invalid_user_id", err.to_string())),
        });
        let date = violations.check(
            fields
                .date
                .ok_or_else(|| missing("date"))
                .and_then(|raw| ShiftDate::parse("date", &raw)),
        );
        let start = violations.check(
            fields
                .start_time
                .ok_or_else(|| missing("startTime"))
                .and_then(|raw| ClockTime::parse("startTime", &raw)),
        );
        let end = violations.check(
            fields
                .end_time
                .ok_or_else(|| missing("endTime"))
                .and_then(|raw| ClockTime::parse("endTime", &raw)),
        );
        let window = match (start, end) {
            (Some(start), Some(end)) => Some(TimeWindow::new(start, end)),
            _ => None,
        };

        match (user_id, date, window) {
            (Some(user_id), Some(date), Some(window)) if violations.is_empty() => Ok(Self {
                user_id,
                date,
                window,
                notes: fields.notes,
            }),
            _ => Err(violations),
        }
    }

    /// Owning user of the shift.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn date(&self) -> &ShiftDate {
        &self.date
    }

    pub fn window(&self) -> &TimeWindow {
        &self.window
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub(crate) fn into_parts(self) -> (UserId, ShiftDate, TimeWindow, Option<String>) {
        (self.user_id, self.date, self.window, self.notes)
    }
}

fn missing(field: &'static str) -> FieldViolation {
    FieldViolation::new(field, "missing", format!("{field} is required"))
}
