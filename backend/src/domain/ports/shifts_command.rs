//! Driving port for shift mutations. Admins and managers only.

use async_trait::async_trait;

use crate::domain::{Error, Identity, ShiftFields, ShiftId, ShiftView};

/// Domain use-case port for creating, updating and deleting shifts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShiftsCommand: Send + Sync {
    /// Validate and store a new shift.
    async fn create_shift(&self, caller: &Identity, fields: ShiftFields)
    -> Result<ShiftView, Error>;

    /// Validate and replace every mutable field of an existing shift.
    async fn update_shift(
        &self,
        caller: &Identity,
        id: &ShiftId,
        fields: ShiftFields,
    ) -> Result<ShiftView, Error>;

    /// Delete a shift.
    async fn delete_shift(&self, caller: &Identity, id: &ShiftId) -> Result<(), Error>;
}
