//! Port abstraction for position persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{Position, PositionId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by position repository adapters.
    pub enum PositionRepositoryError {
        /// Backing store could not be read or written.
        Unavailable { message: String } => "position repository unavailable: {message}",
    }
}

/// Result of an atomic position removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionRemoval {
    /// The position was removed.
    Removed,
    /// No position has the identifier.
    Missing,
    /// At least one user still references the position.
    InUse,
}

/// Port for reading and mutating positions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PositionRepository: Send + Sync {
    /// All positions in insertion order.
    async fn list_positions(&self) -> Result<Vec<Position>, PositionRepositoryError>;

    /// Fetch a position by identifier.
    async fn find_by_id(&self, id: &PositionId)
    -> Result<Option<Position>, PositionRepositoryError>;

    /// Append a new position.
    async fn insert(&self, position: Position) -> Result<(), PositionRepositoryError>;

    /// Replace the position with the same id in place.
    ///
    /// Returns `false` when no such position exists.
    async fn update(&self, position: Position) -> Result<bool, PositionRepositoryError>;

    /// Remove a position unless a user references it.
    async fn remove(&self, id: &PositionId) -> Result<PositionRemoval, PositionRepositoryError>;
}
