//! Bearer token authentication for protected handlers.
//!
//! Handlers take an [`AuthContext`] argument; extraction fails with
//! `401 Unauthorized` before the handler body runs when the request carries
//! no usable `Authorization: Bearer` header.

use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::{Ready, ready};
use tracing::debug;

use crate::domain::{Error, Identity};
use crate::inbound::http::state::HttpState;

const BEARER_SCHEME: &str = "bearer";

/// Authenticated caller resolved from the bearer token.
#[derive(Debug, Clone)]
pub struct AuthContext(Identity);

impl AuthContext {
    /// Wrap an already verified identity.
    pub fn new(identity: Identity) -> Self {
        Self(identity)
    }

    /// The caller's identity as decoded from the token.
    pub fn identity(&self) -> &Identity {
        &self.0
    }
}

fn bearer_token(req: &HttpRequest) -> Result<&str, Error> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| Error::unauthorized("access token required"))?;
    let value = header
        .to_str()
        .map_err(|_| Error::unauthorized("access token required"))?;
    match value.split_once(' ') {
        Some((scheme, token))
            if scheme.eq_ignore_ascii_case(BEARER_SCHEME) && !token.trim().is_empty() =>
        {
            Ok(token.trim())
        }
        _ => Err(Error::unauthorized("access token required")),
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthContext, Error> {
    let state = req
        .app_data::<web::Data<HttpState>>()
        .ok_or_else(|| Error::internal("HTTP state is not configured"))?;
    let token = bearer_token(req)?;
    state
        .tokens
        .verify(token)
        .map(AuthContext::new)
        .map_err(|err| {
            debug!(error = %err, "bearer token rejected");
            Error::unauthorized("invalid access token")
        })
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}
