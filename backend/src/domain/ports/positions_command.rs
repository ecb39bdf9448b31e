//! Driving port for position mutations. Every operation is admin only.

use async_trait::async_trait;

use crate::domain::{Error, Identity, Position, PositionFields, PositionId};

/// Domain use-case port for creating, updating and deleting positions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PositionsCommand: Send + Sync {
    /// Create a position with a fresh identifier.
    async fn create_position(
        &self,
        caller: &Identity,
        fields: PositionFields,
    ) -> Result<Position, Error>;

    /// Replace a position's name and colour.
    async fn update_position(
        &self,
        caller: &Identity,
        id: &PositionId,
        fields: PositionFields,
    ) -> Result<Position, Error>;

    /// Delete a position no user references.
    async fn delete_position(&self, caller: &Identity, id: &PositionId) -> Result<(), Error>;
}
