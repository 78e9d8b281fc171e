use thiserror::Error;

/// Top-level error type for the `wyzely-api` crate.
///
/// Covers every failure mode across both API hosts: credential exchange,
/// transport, the `{code, msg, data}` envelope, and file downloads.
/// `wyzely-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Credential exchange failed (bad password hash, bad API key,
    /// or a login response with no refresh token in it).
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── API ─────────────────────────────────────────────────────────
    /// Error reported inside the `{code, msg}` envelope (any `code != "1"`),
    /// or a non-2xx HTTP status from the API host.
    #[error("Wyze API error (code {code}): {message}")]
    Api { code: String, message: String },

    /// A file URL from an event returned a non-2xx status.
    #[error("Download failed (HTTP {status}): {url}")]
    Download { url: String, status: u16 },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this error means the access token was rejected
    /// and a fresh credential exchange might resolve it.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::Authentication { .. } => true,
            // 2001 is the vendor code for an expired or invalid access token.
            Self::Api { code, .. } => code == "2001",
            _ => false,
        }
    }
}
