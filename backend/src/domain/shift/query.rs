//! Read-side filters for listing shifts.

use crate::domain::{FieldViolation, Identity, UserId, Violations};

use super::{Shift, ShiftDate};

/// Raw list filters as received from an adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftFilterFields {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub user_id: Option<String>,
}

/// Validated shift filter with an inclusive date range.
///
/// The range only applies when both bounds are given; a lone bound is
/// validated but ignored. Blank values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftQuery {
    start: Option<ShiftDate>,
    end: Option<ShiftDate>,
    user_id: Option<UserId>,
}

impl ShiftQuery {
    /// Validate raw filters, reporting every malformed bound together.
    pub fn try_from_fields(fields: ShiftFilterFields) -> Result<Self, Violations> {
        let mut violations = Violations::new();
        let start = present(fields.start_date)
            .and_then(|raw| violations.check(ShiftDate::parse("start_date", &raw)));
        let end = present(fields.end_date)
            .and_then(|raw| violations.check(ShiftDate::parse("end_date", &raw)));
        let user_id = present(fields.user_id).and_then(|raw| {
            violations.check(UserId::new(raw).map_err(|err| {
                FieldViolation::new("userId", "invalid_user_id", err.to_string())
            }))
        });

        if violations.is_empty() {
            Ok(Self {
                start,
                end,
                user_id,
            })
        } else {
            Err(violations)
        }
    }

    /// Confine the query to the caller's own shifts when their role demands it.
    pub fn scoped_to(mut self, identity: &Identity) -> Self {
        if identity.role().sees_only_own_shifts() {
            self.user_id = Some(identity.user_id().clone());
        }
        self
    }

    pub fn start(&self) -> Option<&ShiftDate> {
        self.start.as_ref()
    }

    pub fn end(&self) -> Option<&ShiftDate> {
        self.end.as_ref()
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    /// Whether `shift` passes every filter.
    pub fn matches(&self, shift: &Shift) -> bool {
        let in_range = match (&self.start, &self.end) {
            (Some(start), Some(end)) => shift.date() >= start && shift.date() <= end,
            _ => true,
        };
        in_range && self.user_id.as_ref().is_none_or(|id| shift.user_id() == id)
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}
