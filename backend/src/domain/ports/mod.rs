//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (repositories, hashing, tokens) are implemented by outbound
//! adapters. Driving ports are implemented by domain services and called by
//! inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod login_service;
mod password_hasher;
mod position_repository;
mod positions_command;
mod positions_query;
mod shift_repository;
mod shifts_command;
mod shifts_query;
mod token_codec;
mod user_repository;
mod users_command;
mod users_query;

pub use login_service::LoginService;
#[cfg(test)]
pub use login_service::MockLoginService;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHasher, PasswordHasherError};
#[cfg(test)]
pub use position_repository::MockPositionRepository;
pub use position_repository::{PositionRemoval, PositionRepository, PositionRepositoryError};
#[cfg(test)]
pub use positions_command::MockPositionsCommand;
pub use positions_command::PositionsCommand;
#[cfg(test)]
pub use positions_query::MockPositionsQuery;
pub use positions_query::PositionsQuery;
#[cfg(test)]
pub use shift_repository::MockShiftRepository;
pub use shift_repository::{ShiftRepository, ShiftRepositoryError, ShiftWrite};
#[cfg(test)]
pub use shifts_command::MockShiftsCommand;
pub use shifts_command::ShiftsCommand;
#[cfg(test)]
pub use shifts_query::MockShiftsQuery;
pub use shifts_query::ShiftsQuery;
#[cfg(test)]
pub use token_codec::MockTokenCodec;
pub use token_codec::{TokenCodec, TokenCodecError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserInsert, UserRepository, UserRepositoryError};
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::UsersCommand;
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
