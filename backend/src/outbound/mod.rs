//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **memory**: process-local store behind the user, position and shift
//!   repositories
//! - **security**: bcrypt password hashing and HS256 bearer tokens
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod memory;
pub mod security;
