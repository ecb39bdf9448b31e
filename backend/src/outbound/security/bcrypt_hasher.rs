//! bcrypt-backed [`PasswordHasher`].

use crate::domain::PasswordHash;
use crate::domain::ports::{PasswordHasher, PasswordHasherError};

/// Default bcrypt work factor for stored passwords.
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Password hasher producing `$2b$` bcrypt hashes.
///
/// Verification also accepts `$2a$` and `$2y$` hashes.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher using the given work factor (4 to 31).
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Work factor used for new hashes.
    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHasherError> {
        bcrypt::hash(password, self.cost)
            .map(PasswordHash::new)
            .map_err(|err| PasswordHasherError::hashing(err.to_string()))
    }

    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, PasswordHasherError> {
        bcrypt::verify(password, hash.as_ref())
            .map_err(|err| PasswordHasherError::hashing(err.to_string()))
    }
}
