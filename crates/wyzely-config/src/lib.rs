//! Shared configuration for the wyzely CLI.
//!
//! TOML + environment configuration via figment, credential resolution
//! (config/env + system keyring), and translation to
//! [`wyzely_core::SessionConfig`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use wyzely_core::SessionConfig;

/// Keyring service name for stored secrets.
const KEYRING_SERVICE: &str = "wyzely";

/// Environment prefix: `WYZE_USERNAME`, `WYZE_PASSWORD_HASH`,
/// `WYZE_KEY_ID`, `WYZE_API_KEY`, `WYZE_HOME`.
const ENV_PREFIX: &str = "WYZE_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error(
        "missing credential: {field} (set it in config.toml, the WYZE_ environment, \
         or the system keyring -- `wyzely config init` walks through all of it)"
    )]
    NoCredentials { field: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level configuration, merged from defaults, `config.toml`, and the
/// `WYZE_` environment.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Account email.
    pub username: Option<String>,

    /// Triple-MD5 hash of the account password (plaintext in config is
    /// discouraged -- prefer the keyring or `WYZE_PASSWORD_HASH`).
    pub password_hash: Option<String>,

    /// Developer API key id from the Wyze developer portal.
    pub key_id: Option<String>,

    /// Developer API key (plaintext discouraged -- prefer the keyring).
    pub api_key: Option<String>,

    /// Home directory for cached state (refresh token, downloads).
    pub home: Option<PathBuf>,

    /// Presentation defaults.
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}

// ── Paths ───────────────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "wyzely", "wyzely").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("wyzely");
    p
}

/// Resolve the wyzely home directory: explicit `home` (usually from
/// `WYZE_HOME`) wins, else the platform data dir.
pub fn home_dir(cfg: &Config) -> PathBuf {
    cfg.home.clone().unwrap_or_else(default_home)
}

fn default_home() -> PathBuf {
    ProjectDirs::from("com", "wyzely", "wyzely").map_or_else(
        || {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".wyzely");
            p
        },
        |dirs| dirs.data_dir().to_path_buf(),
    )
}

// ── Config loading ──────────────────────────────────────────────────

/// Load config from an explicit TOML path plus the environment.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX));

    Ok(figment.extract()?)
}

/// Load config from the canonical path plus the environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML at an explicit path.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

/// Serialize config to TOML at the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

// ── Credential resolution ───────────────────────────────────────────

/// Resolve one secret: an explicit config/env value wins, then the
/// system keyring entry `wyzely/<entry>`.
fn resolve_secret(value: Option<&str>, entry_name: &str) -> Result<SecretString, ConfigError> {
    if let Some(v) = value {
        if !v.is_empty() {
            return Ok(SecretString::from(v.to_owned()));
        }
    }
    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, entry_name) {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }
    Err(ConfigError::NoCredentials {
        field: entry_name.into(),
    })
}

/// Store one secret in the system keyring under `wyzely/<entry>`.
pub fn store_secret(entry_name: &str, value: &str) -> Result<(), ConfigError> {
    keyring::Entry::new(KEYRING_SERVICE, entry_name)?.set_password(value)?;
    Ok(())
}

/// Remove one secret from the system keyring. Absent entries are fine.
pub fn erase_secret(entry_name: &str) -> Result<(), ConfigError> {
    match keyring::Entry::new(KEYRING_SERVICE, entry_name)?.delete_credential() {
        Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Keyring entry name for the password hash.
pub const PASSWORD_HASH_ENTRY: &str = "password-hash";
/// Keyring entry name for the developer API key.
pub const API_KEY_ENTRY: &str = "api-key";

/// Build a [`SessionConfig`] from loaded config.
///
/// `username` and `key_id` must be present in config or environment;
/// `password_hash` and `api_key` fall back to the system keyring.
pub fn session_config(cfg: &Config) -> Result<SessionConfig, ConfigError> {
    let username = cfg
        .username
        .clone()
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ConfigError::NoCredentials {
            field: "username".into(),
        })?;
    let key_id = cfg
        .key_id
        .clone()
        .filter(|k| !k.is_empty())
        .ok_or_else(|| ConfigError::NoCredentials {
            field: "key_id".into(),
        })?;
    let password_hash = resolve_secret(cfg.password_hash.as_deref(), PASSWORD_HASH_ENTRY)?;
    let api_key = resolve_secret(cfg.api_key.as_deref(), API_KEY_ENTRY)?;

    Ok(SessionConfig {
        username,
        password_hash,
        key_id,
        api_key,
        home: home_dir(cfg),
        timeout: Duration::from_secs(cfg.defaults.timeout),
    })
}

/// A copy of the config with secret values masked, for display.
pub fn redacted(cfg: &Config) -> Config {
    let mut shown = cfg.clone();
    if shown.password_hash.is_some() {
        shown.password_hash = Some("********".into());
    }
    if shown.api_key.is_some() {
        shown.api_key = Some("********".into());
    }
    shown
}
