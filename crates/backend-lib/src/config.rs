// ============================
// crates/backend-lib/src/config.rs
// ============================
//! Configuration management.
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

use crate::error::AppError;

/// Prefix for environment overrides, e.g. `LOGIN_FORM_AUTH__URL`
pub const ENV_PREFIX: &str = "LOGIN_FORM_";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Server bind address
    pub bind_addr: SocketAddr,
    /// Log level
    pub log_level: String,
    /// Authentication endpoint
    pub auth: AuthSettings,
}

/// Where and how login calls are sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSettings {
    /// Endpoint receiving `POST` login requests
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            log_level: "info".to_string(),
            auth: AuthSettings::default(),
        }
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:8080/api/login".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Settings {
    /// Defaults, then the given TOML file (if it exists), then environment
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let settings: Settings = Self::figment(path.as_ref())
            .extract()
            .map_err(|e| AppError::Config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject settings the server cannot run with
    pub fn validate(&self) -> Result<(), AppError> {
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(AppError::Config(format!(
                "Invalid log level: {}",
                self.log_level
            )));
        }

        if self.auth.timeout_secs == 0 {
            return Err(AppError::Config(
                "Auth timeout must be greater than 0".to_string(),
            ));
        }

        if !(self.auth.url.starts_with("http://") || self.auth.url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "Auth URL must be http(s): {}",
                self.auth.url
            )));
        }

        Ok(())
    }
}
