//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::http::header::AUTHORIZATION;

use crate::domain::ports::{
    LoginService, MockLoginService, MockPositionsCommand, MockPositionsQuery, MockShiftsCommand,
    MockShiftsQuery, MockTokenCodec, MockUsersCommand, MockUsersQuery, PositionsCommand,
    PositionsQuery, ShiftsCommand, ShiftsQuery, TokenCodec, UsersCommand, UsersQuery,
};
use crate::domain::{Identity, Role, UserId};
use crate::inbound::http::state::HttpState;

/// Token accepted by [`accepting_token_for`] codecs.
pub(crate) const TEST_TOKEN: &str = "test-token";

/// `Authorization` header carrying [`TEST_TOKEN`].
pub(crate) fn bearer() -> (actix_web::http::header::HeaderName, String) {
    (AUTHORIZATION, format!("Bearer {TEST_TOKEN}"))
}

pub(crate) fn identity(id: &str, role: Role) -> Identity {
    Identity::new(
        UserId::new(id).expect("fixture user id"),
        format!("{id}@example.com"),
        role,
    )
}

/// Token codec that decodes [`TEST_TOKEN`] to `identity`.
pub(crate) fn accepting_token_for(identity: Identity) -> MockTokenCodec {
    let mut tokens = MockTokenCodec::new();
    tokens
        .expect_verify()
        .withf(|token| token == TEST_TOKEN)
        .returning(move |_| Ok(identity.clone()));
    tokens
}

/// Builder producing [`HttpState`] from mocks; ports left unset reject every
/// call.
pub(crate) struct HttpStateBuilder {
    login: Arc<dyn LoginService>,
    users: Arc<dyn UsersQuery>,
    users_command: Arc<dyn UsersCommand>,
    positions: Arc<dyn PositionsQuery>,
    positions_command: Arc<dyn PositionsCommand>,
    shifts: Arc<dyn ShiftsQuery>,
    shifts_command: Arc<dyn ShiftsCommand>,
    tokens: Arc<dyn TokenCodec>,
}

pub(crate) fn http_state() -> HttpStateBuilder {
    HttpStateBuilder {
        login: Arc::new(MockLoginService::new()),
        users: Arc::new(MockUsersQuery::new()),
        users_command: Arc::new(MockUsersCommand::new()),
        positions: Arc::new(MockPositionsQuery::new()),
        positions_command: Arc::new(MockPositionsCommand::new()),
        shifts: Arc::new(MockShiftsQuery::new()),
        shifts_command: Arc::new(MockShiftsCommand::new()),
        tokens: Arc::new(MockTokenCodec::new()),
    }
}

impl HttpStateBuilder {
    pub(crate) fn with_login(mut self, login: impl LoginService + 'static) -> Self {
        self.login = Arc::new(login);
        self
    }

    pub(crate) fn with_users(mut self, users: impl UsersQuery + 'static) -> Self {
        self.users = Arc::new(users);
        self
    }

    pub(crate) fn with_users_command(mut self, users: impl UsersCommand + 'static) -> Self {
        self.users_command = Arc::new(users);
        self
    }

    pub(crate) fn with_positions(mut self, positions: impl PositionsQuery + 'static) -> Self {
        self.positions = Arc::new(positions);
        self
    }

    pub(crate) fn with_positions_command(
        mut self,
        positions: impl PositionsCommand + 'static,
    ) -> Self {
        self.positions_command = Arc::new(positions);
        self
    }

    pub(crate) fn with_shifts(mut self, shifts: impl ShiftsQuery + 'static) -> Self {
        self.shifts = Arc::new(shifts);
        self
    }

    pub(crate) fn with_shifts_command(mut self, shifts: impl ShiftsCommand + 'static) -> Self {
        self.shifts_command = Arc::new(shifts);
        self
    }

    pub(crate) fn with_tokens(mut self, tokens: impl TokenCodec + 'static) -> Self {
        self.tokens = Arc::new(tokens);
        self
    }

    /// Accept [`TEST_TOKEN`] as `identity`.
    pub(crate) fn signed_in_as(self, identity: Identity) -> Self {
        self.with_tokens(accepting_token_for(identity))
    }

    pub(crate) fn build(self) -> HttpState {
        HttpState {
            login: self.login,
            users: self.users,
            users_command: self.users_command,
            positions: self.positions,
            positions_command: self.positions_command,
            shifts: self.shifts,
            shifts_command: self.shifts_command,
            tokens: self.tokens,
        }
    }
}
