//! Driving port for reading positions.

use async_trait::async_trait;

use crate::domain::{Error, Identity, Position};

/// Domain use-case port for listing positions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PositionsQuery: Send + Sync {
    /// All positions in insertion order.
    async fn list_positions(&self, caller: &Identity) -> Result<Vec<Position>, Error>;
}
