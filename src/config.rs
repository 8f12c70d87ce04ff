use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::error::ScrawlError;

/// Process-wide settings, resolved once at startup and passed into the
/// router state. Every field can be overridden through a `SCRAWL_`-prefixed
/// environment variable (e.g. `SCRAWL_PASSWORD`, `SCRAWL_DATABASE_URL`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    /// Shared credential pair checked on login.
    pub username: String,
    pub password: String,
    /// Secret the cookie signing/encryption key is built from. Must be at
    /// least 64 bytes.
    pub secret_key: String,
    pub loglevel: String,
    /// Drop the `Secure` cookie attribute for plain-HTTP deployments.
    pub insecure_cookie: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:scrawl.db".to_string(),
            bind_addr: "0.0.0.0:8000".to_string(),
            username: "admin".to_string(),
            password: "default".to_string(),
            // Development-only value; override SCRAWL_SECRET_KEY in production.
            secret_key: "scrawl-development-key-scrawl-development-key-000000000000000000000000"
                .to_string(),
            loglevel: "info".to_string(),
            insecure_cookie: false,
        }
    }
}

impl Config {
    /// Defaults merged with `SCRAWL_`-prefixed environment variables.
    pub fn load() -> Result<Self, ScrawlError> {
        let cfg: Config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("SCRAWL_"))
            .extract()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ScrawlError> {
        if self.secret_key.len() < 64 {
            return Err(ScrawlError::InvalidSecretKey);
        }
        Ok(())
    }
}
