//! Position registry domain service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    PositionRemoval, PositionRepository, PositionRepositoryError, PositionsCommand,
    PositionsQuery,
};
use crate::domain::{
    Error, Identity, Permission, Position, PositionDraft, PositionFields, PositionId,
};

fn map_repository_error(error: PositionRepositoryError) -> Error {
    match error {
        PositionRepositoryError::Unavailable { message } => {
            Error::internal(format!("position repository error: {message}"))
        }
    }
}

fn validate(fields: PositionFields) -> Result<PositionDraft, Error> {
    PositionDraft::try_from_fields(fields)
        .map_err(|violations| violations.into_error("invalid position"))
}

/// Position service implementing [`PositionsQuery`] and [`PositionsCommand`].
#[derive(Clone)]
pub struct PositionRegistryService<P> {
    positions: Arc<P>,
}

impl<P> PositionRegistryService<P> {
    /// Create a new registry service.
    pub fn new(positions: Arc<P>) -> Self {
        Self { positions }
    }
}

#[async_trait]
impl<P> PositionsQuery for PositionRegistryService<P>
where
    P: PositionRepository,
{
    async fn list_positions(&self, _caller: &Identity) -> Result<Vec<Position>, Error> {
        self.positions
            .list_positions()
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<P> PositionsCommand for PositionRegistryService<P>
where
    P: PositionRepository,
{
    async fn create_position(
        &self,
        caller: &Identity,
        fields: PositionFields,
    ) -> Result<Position, Error> {
        caller.authorize(Permission::ManagePositions)?;
        let draft = validate(fields)?;
        let position = Position::from_draft(PositionId::random(), draft);

        self.positions
            .insert(position.clone())
            .await
            .map_err(map_repository_error)?;
        tracing::info!(position_id = %position.id(), "position created");
        Ok(position)
    }

    async fn update_position(
        &self,
        caller: &Identity,
        id: &PositionId,
        fields: PositionFields,
    ) -> Result<Position, Error> {
        caller.authorize(Permission::ManagePositions)?;
        let draft = validate(fields)?;
        let position = Position::from_draft(id.clone(), draft);

        let replaced = self
            .positions
            .update(position.clone())
            .await
            .map_err(map_repository_error)?;
        if !replaced {
            return Err(Error::not_found(format!("position {id} not found")));
        }
        tracing::info!(position_id = %id, "position updated");
        Ok(position)
    }

    async fn delete_position(&self, caller: &Identity, id: &PositionId) -> Result<(), Error> {
        caller.authorize(Permission::ManagePositions)?;
        match self
            .positions
            .remove(id)
            .await
            .map_err(map_repository_error)?
        {
            PositionRemoval::Removed => {
                tracing::info!(position_id = %id, "position deleted");
                Ok(())
            }
            PositionRemoval::Missing => Err(Error::not_found(format!("position {id} not found"))),
            PositionRemoval::InUse => {
                tracing::debug!(position_id = %id, "position delete blocked: in use");
                Err(Error::position_in_use("Position is in use by employees"))
            }
        }
    }
}

#[cfg(test)]
#[path = "position_registry_service_tests.rs"]
mod tests;
