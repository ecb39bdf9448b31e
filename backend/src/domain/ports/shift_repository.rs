//! Port abstraction for shift persistence adapters and their errors.
//!
//! Writes are check-then-act operations: the adapter verifies the owner exists
//! and that no other shift in the same `(user, date)` bucket overlaps, then
//! writes, all without letting another writer in between.
use async_trait::async_trait;

use crate::domain::{AuditStamp, Shift, ShiftDraft, ShiftId, ShiftQuery};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by shift repository adapters.
    pub enum ShiftRepositoryError {
        /// Backing store could not be read or written.
        Unavailable { message: String } => "shift repository unavailable: {message}",
    }
}

/// Result of an atomic shift write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftWrite {
    /// The shift was stored; carries the stored record.
    Stored(Shift),
    /// An existing shift overlaps; carries the first conflicting record.
    Overlaps(Shift),
    /// The owning user does not exist.
    UnknownUser,
    /// The shift to revise does not exist.
    Missing,
}

/// Port for reading and mutating shifts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShiftRepository: Send + Sync {
    /// Shifts matching `query`, ordered by date, start time, then id.
    async fn list_shifts(&self, query: &ShiftQuery) -> Result<Vec<Shift>, ShiftRepositoryError>;

    /// Store a new shift if its owner exists and nothing overlaps.
    async fn insert(&self, shift: Shift) -> Result<ShiftWrite, ShiftRepositoryError>;

    /// Replace all mutable fields of shift `id`, keeping its creation stamp.
    ///
    /// The shift being revised is ignored by the overlap check.
    async fn revise(
        &self,
        id: &ShiftId,
        draft: ShiftDraft,
        stamp: AuditStamp,
    ) -> Result<ShiftWrite, ShiftRepositoryError>;

    /// Remove a shift. Returns `false` when it does not exist.
    async fn remove(&self, id: &ShiftId) -> Result<bool, ShiftRepositoryError>;
}
