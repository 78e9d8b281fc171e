//! Auth command handlers.
//!
//! `status` inspects the cached refresh token without touching the
//! cloud; `login` runs the full token dance.

use chrono::{DateTime, Utc};
use serde::Serialize;
use wyzely_core::{REFRESH_TOKEN_FILE, Session, token, token_store};

use crate::cli::{AuthArgs, AuthCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Status view ─────────────────────────────────────────────────────

#[derive(Serialize)]
struct AuthStatus {
    token_path: String,
    cached: bool,
    valid: bool,
    expires_at: Option<DateTime<Utc>>,
}

impl AuthStatus {
    fn state(&self) -> &'static str {
        if self.valid {
            "valid"
        } else if self.cached {
            "expired"
        } else {
            "absent"
        }
    }
}

fn status_detail(s: &AuthStatus, colored: bool) -> String {
    [
        format!("Token file: {}", s.token_path),
        format!("Cached:     {}", if s.cached { "yes" } else { "no" }),
        format!("State:      {}", output::paint_state(s.state(), s.valid, colored)),
        format!(
            "Expires:    {}",
            s.expires_at
                .map_or_else(|| "-".into(), |ts| ts.format("%Y-%m-%d %H:%M UTC").to_string())
        ),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(args: AuthArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        AuthCommand::Status => {
            let config = util::resolved_config(global)?;
            let token_path = wyzely_config::home_dir(&config).join(REFRESH_TOKEN_FILE);
            let cached = token_store::load(&token_path);
            let status = AuthStatus {
                token_path: token_path.display().to_string(),
                cached: cached.is_some(),
                valid: cached.as_deref().is_some_and(token::is_valid),
                expires_at: cached.as_deref().and_then(token::expires_at),
            };

            let colored = output::should_color(&global.color);
            let out = output::render_single(
                &global.output,
                &status,
                |s| status_detail(s, colored),
                |s| s.state().to_owned(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AuthCommand::Login { force } => {
            let config = util::resolved_config(global)?;
            let session_config = wyzely_config::session_config(&config)?;
            let token_path = session_config.refresh_token_path();

            if force {
                match std::fs::remove_file(&token_path) {
                    Ok(()) => {}
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                    Err(e) => return Err(e.into()),
                }
            }

            Session::connect(session_config).await?;

            if !global.quiet {
                let expiry = token_store::load(&token_path)
                    .as_deref()
                    .and_then(token::expires_at)
                    .map_or_else(
                        || "unknown".into(),
                        |ts| ts.format("%Y-%m-%d %H:%M UTC").to_string(),
                    );
                eprintln!("✓ Authenticated; refresh token cached at {}", token_path.display());
                eprintln!("  Valid until {expiry}");
            }
            Ok(())
        }
    }
}
