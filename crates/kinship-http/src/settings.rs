//! Server configuration from the environment
//!
//! Variables (a `.env` file is loaded first when present):
//! - `KINSHIP_DB_PATH`: SQLite file, default `.kinship/store.db`
//! - `KINSHIP_HOST`: bind address, default `0.0.0.0`
//! - `PORT`: bind port, default `5000`
//! - `KINSHIP_LOG`: logging profile, `development` or `production`

use std::path::PathBuf;

use anyhow::{anyhow, Context};
use kinship_core::logging_facility::Profile;

pub const DEFAULT_DB_PATH: &str = ".kinship/store.db";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub db_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub log_profile: Profile,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_profile: Profile::Development,
        }
    }
}

impl Settings {
    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(path) = lookup("KINSHIP_DB_PATH").filter(|v| !v.trim().is_empty()) {
            settings.db_path = PathBuf::from(path);
        }
        if let Some(host) = lookup("KINSHIP_HOST").filter(|v| !v.trim().is_empty()) {
            settings.host = host;
        }
        if let Some(port) = lookup("PORT") {
            settings.port = port
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got '{}'", port))?;
        }
        if let Some(profile) = lookup("KINSHIP_LOG") {
            settings.log_profile = profile.parse().map_err(|e: String| anyhow!(e))?;
        }

        Ok(settings)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
