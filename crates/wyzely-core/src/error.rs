// ── Core error types ──
//
// User-facing errors from wyzely-core. These are NOT API-specific --
// consumers never see HTTP status codes or JSON parse failures directly.
// The `From<wyzely_api::Error>` impl translates transport-layer errors
// into domain-appropriate variants.

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Authentication errors ────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach the Wyze cloud: {reason}")]
    ConnectionFailed { reason: String },

    #[error("Request timed out")]
    Timeout,

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Device not found: {identifier}")]
    DeviceNotFound { identifier: String },

    #[error("Group not found: {name}")]
    GroupNotFound { name: String },

    // ── Storage errors ───────────────────────────────────────────────
    #[error("Cannot persist refresh token to {}: {source}", .path.display())]
    TokenStore {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot write {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Thumbnail download failed (HTTP {status}): {url}")]
    DownloadFailed { url: String, status: u16 },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// The Wyze envelope code (e.g. "1001"), when one was returned.
        code: Option<String>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// True for errors the CLI maps to the authentication exit code.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::AuthenticationFailed { .. })
    }

    /// True for errors the CLI maps to the not-found exit code.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::DeviceNotFound { .. } | Self::GroupNotFound { .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<wyzely_api::Error> for CoreError {
    fn from(err: wyzely_api::Error) -> Self {
        match err {
            wyzely_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            wyzely_api::Error::Api { code, message } if code == "2001" => {
                CoreError::AuthenticationFailed {
                    message: format!("access token rejected (code 2001): {message}"),
                }
            }
            wyzely_api::Error::Api { code, message } => CoreError::Api {
                message,
                code: Some(code),
            },
            wyzely_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        code: None,
                    }
                }
            }
            wyzely_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            wyzely_api::Error::Download { url, status } => {
                CoreError::DownloadFailed { url, status }
            }
            wyzely_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
