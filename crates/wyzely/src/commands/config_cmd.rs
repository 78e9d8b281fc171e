//! Config subcommand handlers.

use dialoguer::{Input, Select};

use wyzely_config::{API_KEY_ENTRY, Config, PASSWORD_HASH_ENTRY};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Helpers ─────────────────────────────────────────────────────────

/// Format config for display. Expects a pre-redacted config.
fn format_config(cfg: &Config) -> String {
    use std::fmt::Write;
    let mut out = String::new();

    if let Some(ref username) = cfg.username {
        let _ = writeln!(out, "username = \"{username}\"");
    }
    if let Some(ref password_hash) = cfg.password_hash {
        let _ = writeln!(out, "password_hash = \"{password_hash}\"");
    }
    if let Some(ref key_id) = cfg.key_id {
        let _ = writeln!(out, "key_id = \"{key_id}\"");
    }
    if let Some(ref api_key) = cfg.api_key {
        let _ = writeln!(out, "api_key = \"{api_key}\"");
    }
    if let Some(ref home) = cfg.home {
        let _ = writeln!(out, "home = \"{}\"", home.display());
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "[defaults]");
    let _ = writeln!(out, "output = \"{}\"", cfg.defaults.output);
    let _ = writeln!(out, "color = \"{}\"", cfg.defaults.color);
    let _ = write!(out, "timeout = {}", cfg.defaults.timeout);

    out
}

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

/// Prompt a secret and read it without echo, rejecting empty input.
fn prompt_secret(label: &str) -> Result<String, CliError> {
    let secret = rpassword::prompt_password(format!("{label}: ")).map_err(prompt_err)?;
    if secret.is_empty() {
        return Err(CliError::Validation {
            field: label.to_owned(),
            reason: "value cannot be empty".into(),
        });
    }
    Ok(secret)
}

/// Offer to store a secret in the system keyring or return it for
/// plaintext config.
///
/// Returns `Some(secret)` if the user chose plaintext, `None` if stored
/// in the keyring.
fn prompt_secret_storage(
    secret: &str,
    entry_name: &str,
    prompt: &str,
    label: &str,
) -> Result<Option<String>, CliError> {
    let choices = &[
        "Store in system keyring (recommended)",
        "Save to config file (plaintext)",
    ];
    let selection = Select::new()
        .with_prompt(prompt)
        .items(choices)
        .default(0)
        .interact()
        .map_err(prompt_err)?;

    if selection == 0 {
        wyzely_config::store_secret(entry_name, secret)?;
        eprintln!("   ✓ {label} stored in system keyring");
        Ok(None)
    } else {
        Ok(Some(secret.to_owned()))
    }
}

// ── Handler ─────────────────────────────────────────────────────────

#[allow(clippy::too_many_lines)]
pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = wyzely_config::config_path();
            if config_path.exists()
                && !util::confirm(
                    &format!("Overwrite existing config at {}?", config_path.display()),
                    global.yes,
                )?
            {
                return Ok(());
            }

            eprintln!("✨ wyzely — configuration wizard");
            eprintln!("   Config path: {}\n", config_path.display());

            // 1. Account email
            let username: String = Input::new()
                .with_prompt("Account email")
                .interact_text()
                .map_err(prompt_err)?;
            if username.is_empty() {
                return Err(CliError::Validation {
                    field: "username".into(),
                    reason: "account email cannot be empty".into(),
                });
            }

            // 2. Password hash. The Wyze login endpoint takes the
            // triple-MD5 of the account password, not the password.
            eprintln!("\n   wyzely authenticates with the triple-MD5 hash of your");
            eprintln!("   account password: md5(md5(md5(password)))\n");
            let password_hash = prompt_secret("Password hash")?;
            let password_hash_field = prompt_secret_storage(
                &password_hash,
                PASSWORD_HASH_ENTRY,
                "Where to store the password hash?",
                "Password hash",
            )?;

            // 3. Developer API key pair (developer-api.wyze.com)
            let key_id: String = Input::new()
                .with_prompt("API key id")
                .interact_text()
                .map_err(prompt_err)?;
            if key_id.is_empty() {
                return Err(CliError::Validation {
                    field: "key_id".into(),
                    reason: "API key id cannot be empty".into(),
                });
            }

            let api_key = prompt_secret("API key")?;
            let api_key_field = prompt_secret_storage(
                &api_key,
                API_KEY_ENTRY,
                "Where to store the API key?",
                "API key",
            )?;

            // 4. Write config
            let cfg = Config {
                username: Some(username),
                password_hash: password_hash_field,
                key_id: Some(key_id),
                api_key: api_key_field,
                home: None,
                defaults: wyzely_config::Defaults::default(),
            };
            wyzely_config::save_config(&cfg)?;

            eprintln!("\n✓ Configuration written to {}", config_path.display());
            eprintln!("\n  Test it: wyzely auth login");
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = wyzely_config::redacted(&wyzely_config::load_config().unwrap_or_default());
            let out =
                output::render_single(&global.output, &cfg, format_config, |_| "config".into());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Set <key> <value> ───────────────────────────────────────
        ConfigCommand::Set { key, value } => {
            // Secrets go to the keyring, never the config file.
            match key.as_str() {
                "password_hash" | "password-hash" => {
                    wyzely_config::store_secret(PASSWORD_HASH_ENTRY, &value)?;
                    eprintln!("✓ password_hash stored in system keyring");
                    return Ok(());
                }
                "api_key" | "api-key" => {
                    wyzely_config::store_secret(API_KEY_ENTRY, &value)?;
                    eprintln!("✓ api_key stored in system keyring");
                    return Ok(());
                }
                _ => {}
            }

            let mut cfg = wyzely_config::load_config().unwrap_or_default();
            match key.as_str() {
                "username" => cfg.username = Some(value),
                "key_id" | "key-id" => cfg.key_id = Some(value),
                "home" => cfg.home = Some(value.into()),
                "output" | "defaults.output" => {
                    if !matches!(
                        value.as_str(),
                        "table" | "json" | "json-compact" | "yaml" | "plain"
                    ) {
                        return Err(CliError::Validation {
                            field: "output".into(),
                            reason: "must be 'table', 'json', 'json-compact', 'yaml', or 'plain'"
                                .into(),
                        });
                    }
                    cfg.defaults.output = value;
                }
                "color" | "defaults.color" => {
                    if !matches!(value.as_str(), "auto" | "always" | "never") {
                        return Err(CliError::Validation {
                            field: "color".into(),
                            reason: "must be 'auto', 'always', or 'never'".into(),
                        });
                    }
                    cfg.defaults.color = value;
                }
                "timeout" | "defaults.timeout" => {
                    cfg.defaults.timeout =
                        value.parse().map_err(|_| CliError::Validation {
                            field: "timeout".into(),
                            reason: "must be a number (seconds)".into(),
                        })?;
                }
                other => {
                    return Err(CliError::Validation {
                        field: other.into(),
                        reason: format!(
                            "unknown config key '{other}'. Valid keys: username, password_hash, \
                             key_id, api_key, home, output, color, timeout"
                        ),
                    });
                }
            }

            wyzely_config::save_config(&cfg)?;
            eprintln!("✓ Set {key}");
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            println!("{}", wyzely_config::config_path().display());
            Ok(())
        }
    }
}
