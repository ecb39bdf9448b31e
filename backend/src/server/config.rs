//! Server settings loaded via OrthoConfig.
//!
//! Values are layered from defaults, an optional configuration file,
//! `SHIFTPLAN_*` environment variables and command-line flags.

use ortho_config::OrthoConfig;
use serde::Deserialize;
use tracing::warn;

use crate::outbound::security::DEFAULT_BCRYPT_COST;

/// Signing secret used when none is configured. Development only.
pub const DEVELOPMENT_JWT_SECRET: &str = "shiftplan-development-secret";

const DEFAULT_HOST: &str = "0.0.0.0";

/// Configuration values controlling the HTTP listener and credentials.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SHIFTPLAN")]
pub struct ServerSettings {
    /// Interface to bind. Defaults to every IPv4 interface.
    pub host: Option<String>,
    /// TCP port to listen on.
    #[ortho_config(default = 3000)]
    pub port: u16,
    /// HS256 secret used to sign and verify access tokens.
    pub jwt_secret: Option<String>,
    /// bcrypt work factor for new password hashes.
    pub bcrypt_cost: Option<u32>,
}

impl ServerSettings {
    /// Return the host and port the server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> (String, u16) {
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
        (host.to_owned(), self.port)
    }

    /// Return the configured signing secret, falling back to the
    /// development secret with a warning.
    #[must_use]
    pub fn jwt_secret(&self) -> &str {
        match self.jwt_secret.as_deref() {
            Some(secret) if !secret.is_empty() => secret,
            _ => {
                warn!("SHIFTPLAN_JWT_SECRET is not set; using the development secret");
                DEVELOPMENT_JWT_SECRET
            }
        }
    }

    /// Return the configured bcrypt cost, falling back to the default.
    #[must_use]
    pub fn bcrypt_cost(&self) -> u32 {
        self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "SHIFTPLAN_HOST",
        "SHIFTPLAN_PORT",
        "SHIFTPLAN_JWT_SECRET",
        "SHIFTPLAN_BCRYPT_COST",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("shiftplan")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), ("0.0.0.0".to_owned(), 3000));
        assert_eq!(settings.jwt_secret(), DEVELOPMENT_JWT_SECRET);
        assert_eq!(settings.bcrypt_cost(), DEFAULT_BCRYPT_COST);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("SHIFTPLAN_HOST", Some("127.0.0.1".to_owned())),
            ("SHIFTPLAN_PORT", Some("8081".to_owned())),
            ("SHIFTPLAN_JWT_SECRET", Some("s3cret".to_owned())),
            ("SHIFTPLAN_BCRYPT_COST", Some("12".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), ("127.0.0.1".to_owned(), 8081));
        assert_eq!(settings.jwt_secret(), "s3cret");
        assert_eq!(settings.bcrypt_cost(), 12);
    }

    #[rstest]
    fn blank_secret_falls_back_to_development_secret() {
        let settings = ServerSettings {
            host: None,
            port: 3000,
            jwt_secret: Some(String::new()),
            bcrypt_cost: None,
        };
        assert_eq!(settings.jwt_secret(), DEVELOPMENT_JWT_SECRET);
    }
}
