//! Port for issuing and verifying bearer tokens.

use crate::domain::{AccessToken, Identity};

use super::define_port_error;

define_port_error! {
    /// Errors raised by token codec adapters.
    pub enum TokenCodecError {
        /// A token could not be signed.
        Issue { message: String } => "token could not be issued: {message}",
        /// A presented token failed signature or claim checks.
        Rejected { message: String } => "token rejected: {message}",
    }
}

/// Signs identities into tokens and recovers identities from tokens.
#[cfg_attr(test, mockall::automock)]
pub trait TokenCodec: Send + Sync {
    /// Issue a signed token embedding the identity's id, email and role.
    fn issue(&self, identity: &Identity) -> Result<AccessToken, TokenCodecError>;

    /// Verify a token and decode the identity it carries.
    fn verify(&self, token: &str) -> Result<Identity, TokenCodecError>;
}
