//! Shift scheduling domain service.
//!
//! Every mutation runs the same pipeline: authorize the caller, validate the
//! payload, then hand the write to the repository, which checks the owner and
//! the overlap rule atomically. Reads are filtered by role and joined with the
//! current user and position records.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;

use crate::domain::ports::{
    PositionRepository, PositionRepositoryError, ShiftRepository, ShiftRepositoryError,
    ShiftWrite, ShiftsCommand, ShiftsQuery, UserRepository, UserRepositoryError,
};
use crate::domain::{
    AuditStamp, Directory, Error, Identity, Permission, Shift, ShiftDraft, ShiftFields,
    ShiftFilterFields, ShiftId, ShiftQuery, ShiftView,
};

fn map_shift_error(error: ShiftRepositoryError) -> Error {
    match error {
        ShiftRepositoryError::Unavailable { message } => {
            Error::internal(format!("shift repository error: {message}"))
        }
    }
}

fn map_user_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Unavailable { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

fn map_position_error(error: PositionRepositoryError) -> Error {
    match error {
        PositionRepositoryError::Unavailable { message } => {
            Error::internal(format!("position repository error: {message}"))
        }
    }
}

fn overlap_error(conflict: &Shift) -> Error {
    let window = conflict.window();
    Error::shift_overlap(format!(
        "shift overlaps with existing shift on {} from {} to {}",
        conflict.date(),
        window.start(),
        window.end()
    ))
    .with_details(json!({
        "conflict": {
            "shiftId": conflict.id().as_ref(),
            "date": conflict.date().as_ref(),
            "startTime": window.start().to_string(),
            "endTime": window.end().to_string(),
        }
    }))
}

fn validate(fields: ShiftFields) -> Result<ShiftDraft, Error> {
    ShiftDraft::try_from_fields(fields).map_err(|violations| violations.into_error("invalid shift"))
}

/// Shift service implementing [`ShiftsQuery`] and [`ShiftsCommand`].
#[derive(Clone)]
pub struct ShiftSchedulerService<S, U, P> {
    shifts: Arc<S>,
    users: Arc<U>,
    positions: Arc<P>,
    clock: Arc<dyn Clock>,
}

impl<S, U, P> ShiftSchedulerService<S, U, P> {
    /// Create a new scheduler.
    ///
    /// # Examples
    /// ```
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// # use shiftplan::domain::ShiftSchedulerService;
    /// # use shiftplan::outbound::memory::MemoryStore;
    /// let store = Arc::new(MemoryStore::default());
    /// let scheduler = ShiftSchedulerService::new(
    ///     store.clone(),
    ///     store.clone(),
    ///     store,
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = scheduler;
    /// ```
    pub fn new(shifts: Arc<S>, users: Arc<U>, positions: Arc<P>, clock: Arc<dyn Clock>) -> Self {
        Self {
            shifts,
            users,
            positions,
            clock,
        }
    }

    fn stamp(&self, caller: &Identity) -> AuditStamp {
        AuditStamp {
            by: caller.user_id().clone(),
            at: self.clock.utc(),
        }
    }
}

impl<S, U, P> ShiftSchedulerService<S, U, P>
where
    S: ShiftRepository,
    U: UserRepository,
    P: PositionRepository,
{
    async fn directory(&self) -> Result<Directory, Error> {
        let users = self.users.list_users().await.map_err(map_user_error)?;
        let positions = self
            .positions
            .list_positions()
            .await
            .map_err(map_position_error)?;
        Ok(Directory::new(users, positions))
    }

    async fn finish_write(&self, write: ShiftWrite, draft_owner: &str) -> Result<ShiftView, Error> {
        match write {
            ShiftWrite::Stored(shift) => Ok(self.directory().await?.shift_view(&shift)),
            ShiftWrite::Overlaps(conflict) => {
                tracing::debug!(
                    user_id = %conflict.user_id(),
                    conflicting_shift_id = %conflict.id(),
                    "shift write rejected: overlap"
                );
                Err(overlap_error(&conflict))
            }
            ShiftWrite::UnknownUser => {
                Err(Error::not_found(format!("user {draft_owner} not found")))
            }
            ShiftWrite::Missing => Err(Error::not_found("shift not found")),
        }
    }
}

#[async_trait]
impl<S, U, P> ShiftsQuery for ShiftSchedulerService<S, U, P>
where
    S: ShiftRepository,
    U: UserRepository,
    P: PositionRepository,
{
    async fn list_shifts(
        &self,
        caller: &Identity,
        filter: ShiftFilterFields,
    ) -> Result<Vec<ShiftView>, Error> {
        caller.authorize(Permission::ReadShifts)?;
        let query = ShiftQuery::try_from_fields(filter)
            .map_err(|violations| violations.into_error("invalid shift filter"))?
            .scoped_to(caller);

        let shifts = self
            .shifts
            .list_shifts(&query)
            .await
            .map_err(map_shift_error)?;
        let directory = self.directory().await?;
        Ok(shifts
            .iter()
            .map(|shift| directory.shift_view(shift))
            .collect())
    }
}

#[async_trait]
impl<S, U, P> ShiftsCommand for ShiftSchedulerService<S, U, P>
where
    S: ShiftRepository,
    U: UserRepository,
    P: PositionRepository,
{
    async fn create_shift(
        &self,
        caller: &Identity,
        fields: ShiftFields,
    ) -> Result<ShiftView, Error> {
        caller.authorize(Permission::WriteShifts)?;
        let draft = validate(fields)?;
        let owner = draft.user_id().to_string();
        let shift = Shift::create(ShiftId::random(), draft, self.stamp(caller));
        let shift_id = shift.id().clone();

        let write = self.shifts.insert(shift).await.map_err(map_shift_error)?;
        let stored = matches!(write, ShiftWrite::Stored(_));
        let view = self.finish_write(write, &owner).await?;
        if stored {
            tracing::info!(shift_id = %shift_id, user_id = %owner, "shift created");
        }
        Ok(view)
    }

    async fn update_shift(
        &self,
        caller: &Identity,
        id: &ShiftId,
        fields: ShiftFields,
    ) -> Result<ShiftView, Error> {
        caller.authorize(Permission::WriteShifts)?;
        let draft = validate(fields)?;
        let owner = draft.user_id().to_string();

        let write = self
            .shifts
            .revise(id, draft, self.stamp(caller))
            .await
            .map_err(map_shift_error)?;
        if matches!(write, ShiftWrite::Missing) {
            return Err(Error::not_found(format!("shift {id} not found")));
        }
        let stored = matches!(write, ShiftWrite::Stored(_));
        let view = self.finish_write(write, &owner).await?;
        if stored {
            tracing::info!(shift_id = %id, user_id = %owner, "shift updated");
        }
        Ok(view)
    }

    async fn delete_shift(&self, caller: &Identity, id: &ShiftId) -> Result<(), Error> {
        caller.authorize(Permission::WriteShifts)?;
        let removed = self.shifts.remove(id).await.map_err(map_shift_error)?;
        if !removed {
            return Err(Error::not_found(format!("shift {id} not found")));
        }
        tracing::info!(shift_id = %id, "shift deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "shift_scheduler_service_tests.rs"]
mod tests;
