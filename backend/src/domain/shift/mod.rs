//! Shifts: per-user, per-day time windows and the rules that keep them
//! consistent.
//!
//! For a fixed user and date, no two stored shifts have overlapping
//! `[start, end)` windows. [`first_conflict`] implements the check; stores run
//! it while holding their write lock so the check and the write are atomic.

mod draft;
mod overlap;
mod query;
mod time;

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::domain::identifier::opaque_id;
use crate::domain::UserId;

pub use draft::{ShiftDraft, ShiftFields};
pub use overlap::first_conflict;
pub use query::{ShiftFilterFields, ShiftQuery};
pub use time::{ClockTime, ShiftDate, TimeWindow};

opaque_id! {
    /// Stable shift identifier.
    ShiftId
}

/// Who changed a shift and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditStamp {
    pub by: UserId,
    pub at: DateTime<Utc>,
}

/// Creation and last-modification stamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftAudit {
    created: AuditStamp,
    updated: Option<AuditStamp>,
}

impl ShiftAudit {
    pub fn created(&self) -> &AuditStamp {
        &self.created
    }

    pub fn updated(&self) -> Option<&AuditStamp> {
        self.updated.as_ref()
    }
}

/// Stored shift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shift {
    id: ShiftId,
    user_id: UserId,
    date: ShiftDate,
    window: TimeWindow,
    notes: Option<String>,
    audit: ShiftAudit,
}

impl Shift {
    /// Create a new shift stamped with its creator.
    pub fn create(id: ShiftId, draft: ShiftDraft, created: AuditStamp) -> Self {
        let (user_id, date, window, notes) = draft.into_parts();
        Self {
            id,
            user_id,
            date,
            window,
            notes,
            audit: ShiftAudit {
                created,
                updated: None,
            },
        }
    }

    /// Replace every mutable field, keeping the id and creation stamp.
    pub fn revise(&self, draft: ShiftDraft, updated: AuditStamp) -> Self {
        let (user_id, date, window, notes) = draft.into_parts();
        Self {
            id: self.id.clone(),
            user_id,
            date,
            window,
            notes,
            audit: ShiftAudit {
                created: self.audit.created.clone(),
                updated: Some(updated),
            },
        }
    }

    pub fn id(&self) -> &ShiftId {
        &self.id
    }

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

    pub fn audit(&self) -> &ShiftAudit {
        &self.audit
    }

    /// Listing order: date, then start time, then id.
    pub fn schedule_order(a: &Shift, b: &Shift) -> Ordering {
        a.date
            .cmp(&b.date)
            .then_with(|| a.window.start().cmp(&b.window.start()))
            .then_with(|| a.id.cmp(&b.id))
    }
}
