//! Builders wiring the in-memory store and security adapters into HTTP state.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::PasswordHasherError;
use crate::domain::{
    AuthService, PositionRegistryService, ShiftSchedulerService, UserDirectoryService,
};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::MemoryStore;
use crate::outbound::security::{BcryptPasswordHasher, JwtTokenCodec};

/// Adapters shared by every domain service.
#[derive(Clone)]
pub struct Adapters {
    pub store: Arc<MemoryStore>,
    pub hasher: Arc<BcryptPasswordHasher>,
    pub tokens: Arc<JwtTokenCodec>,
    pub clock: Arc<dyn Clock>,
}

impl Adapters {
    /// Seed a fresh store and build the security adapters.
    ///
    /// # Errors
    /// Returns an error when the seed administrator password cannot be hashed.
    pub fn seeded(
        jwt_secret: &[u8],
        bcrypt_cost: u32,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, PasswordHasherError> {
        let hasher = Arc::new(BcryptPasswordHasher::new(bcrypt_cost));
        let store = Arc::new(MemoryStore::seeded(hasher.as_ref())?);
        let tokens = Arc::new(JwtTokenCodec::new(jwt_secret, clock.clone()));
        Ok(Self {
            store,
            hasher,
            tokens,
            clock,
        })
    }
}

/// Assemble every driving port over the shared adapters.
#[must_use]
pub fn build_http_state(adapters: &Adapters) -> HttpState {
    let Adapters {
        store,
        hasher,
        tokens,
        clock,
    } = adapters;

    let users = Arc::new(UserDirectoryService::new(
        store.clone(),
        store.clone(),
        hasher.clone(),
    ));
    let positions = Arc::new(PositionRegistryService::new(store.clone()));
    let shifts = Arc::new(ShiftSchedulerService::new(
        store.clone(),
        store.clone(),
        store.clone(),
        clock.clone(),
    ));
    let login = Arc::new(AuthService::new(
        store.clone(),
        store.clone(),
        hasher.clone(),
        tokens.clone(),
    ));

    HttpState {
        login,
        users: users.clone(),
        users_command: users,
        positions: positions.clone(),
        positions_command: positions,
        shifts: shifts.clone(),
        shifts_command: shifts,
        tokens: tokens.clone(),
    }
}
