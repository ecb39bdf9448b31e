//! HS256 JSON Web Token [`TokenCodec`].
//!
//! Tokens carry `{id, email, role, iat}` and no expiry; they stay valid until
//! the signing secret changes.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use mockable::Clock;
use serde::{Deserialize, Serialize};

use crate::domain::ports::{TokenCodec, TokenCodecError};
use crate::domain::{AccessToken, Identity, Role, UserId};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    id: String,
    email: String,
    role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    iat: Option<i64>,
}

/// Token codec signing with a shared HMAC secret.
#[derive(Clone)]
pub struct JwtTokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl JwtTokenCodec {
    /// Build a codec from the shared secret.
    pub fn new(secret: &[u8], clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        let empty_claims: &[&str] = &[];
        validation.set_required_spec_claims(empty_claims);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            clock,
        }
    }
}

impl TokenCodec for JwtTokenCodec {
    fn issue(&self, identity: &Identity) -> Result<AccessToken, TokenCodecError> {
        let claims = Claims {
            id: identity.user_id().to_string(),
            email: identity.email().to_owned(),
            role: identity.role(),
            iat: Some(self.clock.utc().timestamp()),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map(AccessToken::new)
            .map_err(|err| TokenCodecError::issue(err.to_string()))
    }

    fn verify(&self, token: &str) -> Result<Identity, TokenCodecError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|err| TokenCodecError::rejected(err.to_string()))?;
        let Claims {
            id, email, role, ..
        } = data.claims;
        let user_id = UserId::new(id).map_err(|err| TokenCodecError::rejected(err.to_string()))?;
        Ok(Identity::new(user_id, email, role))
    }
}
