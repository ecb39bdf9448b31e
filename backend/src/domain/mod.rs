//! Domain primitives, aggregates and services.
//!
//! Purpose: Define strongly typed entities for users, positions and shifts,
//! the role policy guarding them, and the services implementing the driving
//! ports. Nothing here depends on HTTP or on a concrete store.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport agnostic error payload.
//! - Role / Permission: closed role set with exhaustive policy.
//! - User, Position, Shift: aggregates and their validated drafts.
//! - Directory: read-side join producing `UserView` and `ShiftView`.
//! - Services: `AuthService`, `UserDirectoryService`,
//!   `PositionRegistryService`, `ShiftSchedulerService`.

pub mod auth;
pub mod directory;
pub mod error;
pub(crate) mod identifier;
pub mod ports;
pub mod position;
pub mod role;
pub mod shift;
pub mod trace_id;
pub mod user;
pub mod violation;

mod auth_service;
mod position_registry_service;
mod shift_scheduler_service;
mod user_directory_service;

#[cfg(test)]
pub(crate) mod service_test_support;

pub use self::auth::{AccessToken, Identity, LoginCredentials, LoginOutcome, LoginValidationError};
pub use self::auth_service::AuthService;
pub use self::directory::{Directory, ShiftOwnerView, ShiftView, UserView};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::identifier::IdValidationError;
pub use self::position::{HexColor, Position, PositionDraft, PositionFields, PositionId};
pub use self::position_registry_service::PositionRegistryService;
pub use self::role::{Permission, Role, UnknownRole};
pub use self::shift::{
    AuditStamp, ClockTime, Shift, ShiftAudit, ShiftDate, ShiftDraft, ShiftFields,
    ShiftFilterFields, ShiftId, ShiftQuery, TimeWindow,
};
pub use self::shift_scheduler_service::ShiftSchedulerService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    DisplayName, EmailAddress, NewUserFields, PasswordHash, User, UserDraft, UserId,
    UserValidationError,
};
pub use self::user_directory_service::UserDirectoryService;
pub use self::violation::{FieldViolation, Violations};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use shiftplan::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
