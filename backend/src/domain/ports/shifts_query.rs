//! Driving port for reading shifts.

use async_trait::async_trait;

use crate::domain::{Error, Identity, ShiftFilterFields, ShiftView};

/// Domain use-case port for listing shifts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShiftsQuery: Send + Sync {
    /// Shifts matching `filter`, joined with their owners.
    ///
    /// Employees only ever see their own shifts, whatever `filter` asks for.
    async fn list_shifts(
        &self,
        caller: &Identity,
        filter: ShiftFilterFields,
    ) -> Result<Vec<ShiftView>, Error>;
}
