//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use wyzely_core::CoreError;

/// Exit codes for process termination.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(wyzely::auth_failed),
        help(
            "Verify your account email, password hash, and developer API key.\n\
             Run: wyzely config init\n\
             Then: wyzely auth login"
        )
    )]
    AuthFailed { message: String },

    #[error("Missing credential: {field}")]
    #[diagnostic(
        code(wyzely::no_credentials),
        help(
            "Configure credentials with: wyzely config init\n\
             Or set WYZE_USERNAME, WYZE_PASSWORD_HASH, WYZE_KEY_ID, and\n\
             WYZE_API_KEY in the environment."
        )
    )]
    NoCredentials { field: String },

    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the Wyze cloud")]
    #[diagnostic(
        code(wyzely::connection_failed),
        help(
            "Check your network connection.\n\
             Reason: {reason}"
        )
    )]
    ConnectionFailed { reason: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(wyzely::timeout),
        help("Increase the timeout with --timeout or WYZE_TIMEOUT.")
    )]
    Timeout,

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(wyzely::not_found),
        help("Run: wyzely {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── API ──────────────────────────────────────────────────────────

    #[error("Wyze API error ({code}): {message}")]
    #[diagnostic(code(wyzely::api_error))]
    ApiError { code: String, message: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(wyzely::validation))]
    Validation { field: String, reason: String },

    // ── Interactive ──────────────────────────────────────────────────

    #[error("'{action}' requires confirmation")]
    #[diagnostic(
        code(wyzely::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error(transparent)]
    #[diagnostic(code(wyzely::config))]
    Config(Box<wyzely_config::ConfigError>),

    // ── IO ───────────────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::AuthenticationFailed { message } => CliError::AuthFailed { message },

            CoreError::ConnectionFailed { reason } => CliError::ConnectionFailed { reason },

            CoreError::Timeout => CliError::Timeout,

            CoreError::DeviceNotFound { identifier } => CliError::NotFound {
                resource_type: "device".into(),
                identifier,
                list_command: "devices list".into(),
            },

            CoreError::GroupNotFound { name } => CliError::NotFound {
                resource_type: "group".into(),
                identifier: name,
                list_command: "groups list".into(),
            },

            CoreError::Api { message, code } => CliError::ApiError {
                code: code.unwrap_or_default(),
                message,
            },

            CoreError::DownloadFailed { url, status } => CliError::ApiError {
                code: status.to_string(),
                message: format!("download failed: {url}"),
            },

            CoreError::TokenStore { path, source } | CoreError::FileWrite { path, source } => {
                CliError::Io(std::io::Error::new(
                    source.kind(),
                    format!("{}: {source}", path.display()),
                ))
            }

            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },

            CoreError::Internal(message) => CliError::ApiError {
                code: "internal".into(),
                message,
            },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<wyzely_config::ConfigError> for CliError {
    fn from(err: wyzely_config::ConfigError) -> Self {
        match err {
            wyzely_config::ConfigError::NoCredentials { field } => {
                CliError::NoCredentials { field }
            }
            other => CliError::Config(Box::new(other)),
        }
    }
}
