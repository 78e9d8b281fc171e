// ── Runtime session configuration ──
//
// These types describe *how* to authenticate with the Wyze cloud.
// They carry credential data and connection tuning, but never touch
// disk. The CLI constructs a `SessionConfig` and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;

/// File name of the cached refresh token under the wyzely home directory.
pub const REFRESH_TOKEN_FILE: &str = "refresh_token.txt";

/// Configuration for a single Wyze cloud session.
///
/// Built by the CLI from its config layer -- core never reads config files.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Account email.
    pub username: String,
    /// Triple-MD5 hash of the account password (the Wyze login endpoint
    /// never sees the plaintext).
    pub password_hash: SecretString,
    /// Developer API key id, sent as the `Keyid` login header.
    pub key_id: String,
    /// Developer API key, sent as the `Apikey` login header.
    pub api_key: SecretString,
    /// Directory holding cached state (refresh token).
    pub home: PathBuf,
    /// Request timeout.
    pub timeout: Duration,
}

impl SessionConfig {
    /// Path of the cached refresh token file under `home`.
    pub fn refresh_token_path(&self) -> PathBuf {
        self.home.join(REFRESH_TOKEN_FILE)
    }
}
