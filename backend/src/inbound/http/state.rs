//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    LoginService, PositionsCommand, PositionsQuery, ShiftsCommand, ShiftsQuery, TokenCodec,
    UsersCommand, UsersQuery,
};

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```no_run
/// use std::sync::Arc;
///
/// use mockable::DefaultClock;
/// use shiftplan::domain::{
///     AuthService, PositionRegistryService, ShiftSchedulerService, UserDirectoryService,
/// };
/// use shiftplan::inbound::http::state::HttpState;
/// use shiftplan::outbound::memory::MemoryStore;
/// use shiftplan::outbound::security::{BcryptPasswordHasher, JwtTokenCodec};
///
/// let hasher = Arc::new(BcryptPasswordHasher::default());
/// let store = Arc::new(MemoryStore::seeded(hasher.as_ref()).expect("seed"));
/// let tokens = Arc::new(JwtTokenCodec::new(b"secret", Arc::new(DefaultClock)));
/// let users = Arc::new(UserDirectoryService::new(
///     store.clone(),
///     store.clone(),
///     hasher.clone(),
/// ));
/// let positions = Arc::new(PositionRegistryService::new(store.clone()));
/// let shifts = Arc::new(ShiftSchedulerService::new(
///     store.clone(),
///     store.clone(),
///     store.clone(),
///     Arc::new(DefaultClock),
/// ));
///
/// let state = HttpState {
///     login: Arc::new(AuthService::new(store.clone(), store, hasher, tokens.clone())),
///     users: users.clone(),
///     users_command: users,
///     positions: positions.clone(),
///     positions_command: positions,
///     shifts: shifts.clone(),
///     shifts_command: shifts,
///     tokens,
/// };
/// let _login = state.login.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
    pub positions: Arc<dyn PositionsQuery>,
    pub positions_command: Arc<dyn PositionsCommand>,
    pub shifts: Arc<dyn ShiftsQuery>,
    pub shifts_command: Arc<dyn ShiftsCommand>,
    /// Verifies bearer tokens presented on protected routes.
    pub tokens: Arc<dyn TokenCodec>,
}
