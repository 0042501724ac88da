//! Deployment configuration.
//!
//! Defaults are overlaid by a per-user config file, then by the environment
//! (a `.env` file is honoured). The master password is baked in at build time
//! from `PASSVAULT_MASTER_PASSWORD` and may be replaced by the same variable
//! at runtime; it is never written to the config file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::{VaultError, VaultResult};

const BUILD_MASTER_PASSWORD: Option<&str> = option_env!("PASSVAULT_MASTER_PASSWORD");

pub const ENV_DATABASE_URL: &str = "MONGODB_URI";
pub const ENV_DATABASE_NAME: &str = "PASSVAULT_DATABASE";
pub const ENV_PORT: &str = "PORT";
pub const ENV_API_URL: &str = "PASSVAULT_API_URL";
pub const ENV_MASTER_PASSWORD: &str = "PASSVAULT_MASTER_PASSWORD";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// MongoDB connection string
    pub database_url: String,
    /// Database used when the connection string names none
    pub database_name: String,
    /// Port the HTTP service listens on
    pub port: u16,
    /// Base API URL used by the client, e.g. `http://localhost:5000/api`
    pub api_url: String,
    #[serde(skip)]
    pub master_password: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Per-user application directory holding the config file and UI logs
pub fn app_dir() -> PathBuf {
    if cfg!(windows) {
        let appdata = std::env::var_os("APPDATA")
            .unwrap_or_else(|| std::env::var_os("USERPROFILE").unwrap_or_default());
        PathBuf::from(appdata).join("Passvault")
    } else {
        let home = std::env::var_os("HOME").unwrap_or_default();
        PathBuf::from(home).join(".passvault")
    }
}

pub fn config_path() -> PathBuf {
    app_dir().join("config.json")
}

fn load_from_file(path: &Path) -> Option<VaultConfig> {
    let raw = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&raw) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable config file");
            None
        }
    }
}

impl VaultConfig {
    fn defaults() -> Self {
        Self {
            database_url: "mongodb://localhost:27017/passvault".to_string(),
            database_name: "passvault".to_string(),
            port: 5000,
            api_url: "http://localhost:5000/api".to_string(),
            master_password: BUILD_MASTER_PASSWORD.map(str::to_string),
        }
    }

    fn apply_env_overrides<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = non_empty(env(ENV_DATABASE_URL)) {
            self.database_url = value;
        }
        if let Some(value) = non_empty(env(ENV_DATABASE_NAME)) {
            self.database_name = value;
        }
        if let Some(value) = non_empty(env(ENV_PORT)) {
            match value.parse::<u16>() {
                Ok(port) => self.port = port,
                Err(_) => warn!(value = %value, "ignoring invalid {}", ENV_PORT),
            }
        }
        if let Some(value) = non_empty(env(ENV_API_URL)) {
            self.api_url = value;
        }
        if let Some(value) = env(ENV_MASTER_PASSWORD).filter(|v| !v.is_empty()) {
            self.master_password = Some(value);
        }
    }

    /// Resolves the configuration from `path` and an environment lookup
    pub fn load_with<F>(path: &Path, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match load_from_file(path) {
            Some(mut from_file) => {
                from_file.master_password = BUILD_MASTER_PASSWORD.map(str::to_string);
                from_file
            }
            None => Self::defaults(),
        };
        config.apply_env_overrides(env);
        config
    }

    pub fn load() -> Self {
        let _ = dotenvy::dotenv();
        Self::load_with(&config_path(), |key| std::env::var(key).ok())
    }

    pub fn has_master_password(&self) -> bool {
        self.master_password.is_some()
    }

    /// Base API URL without a trailing slash
    pub fn api_base(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    pub fn save_to_file(&self, path: &Path) -> VaultResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let payload = serde_json::to_string_pretty(self)
            .map_err(|e| VaultError::config(format!("Save failed: {}", e)))?;
        fs::write(path, payload)?;
        Ok(())
    }
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self::defaults()
    }
}
