//! Shared helpers for command handlers.

use std::io::IsTerminal;

use chrono::{DateTime, NaiveDate, Utc};

use wyzely_core::{Device, MacAddress, Session};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Load config from disk + environment and apply CLI flag overrides.
pub fn resolved_config(global: &GlobalOpts) -> Result<wyzely_config::Config, CliError> {
    let mut config = wyzely_config::load_config()?;
    if let Some(home) = &global.home {
        config.home = Some(home.clone());
    }
    if let Some(timeout) = global.timeout {
        config.defaults.timeout = timeout;
    }
    Ok(config)
}

/// Resolve device identifiers (nickname or MAC) against the inventory.
///
/// Every identifier must match a known device; the first miss is an
/// error naming it.
pub async fn resolve_devices(
    session: &Session,
    identifiers: &[String],
) -> Result<Vec<Device>, CliError> {
    let inventory = session.devices().await?;
    let mut matched = Vec::with_capacity(identifiers.len());
    for identifier in identifiers {
        let needle = MacAddress::new(identifier);
        let device = inventory
            .iter()
            .find(|d| d.nickname.as_deref() == Some(identifier.as_str()) || d.mac == needle)
            .ok_or_else(|| CliError::NotFound {
                resource_type: "device".into(),
                identifier: identifier.clone(),
                list_command: "devices list".into(),
            })?;
        matched.push(device.clone());
    }
    Ok(matched)
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
///
/// Without a terminal on stdin there is nobody to ask, so require the
/// flag instead of hanging.
pub fn confirm(action: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: action.to_owned(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(action)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Parse a `NAME=VALUE` property assignment.
pub fn parse_assignment(raw: &str) -> Result<(String, String), CliError> {
    raw.split_once('=')
        .map(|(name, value)| (name.trim().to_owned(), value.trim().to_owned()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| CliError::Validation {
            field: "set".into(),
            reason: format!("'{raw}' is not NAME=VALUE"),
        })
}

/// Parse a point in time from an RFC 3339 timestamp, a plain date
/// (midnight UTC), or an age relative to now (`24h`, `7d 12h`).
pub fn parse_time(field: &str, raw: &str) -> Result<DateTime<Utc>, CliError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(start) = date.and_hms_opt(0, 0, 0) {
            return Ok(start.and_utc());
        }
    }
    if let Ok(age) = humantime::parse_duration(raw) {
        let age = chrono::Duration::from_std(age).map_err(|_| CliError::Validation {
            field: field.to_owned(),
            reason: format!("'{raw}' is too far in the past"),
        })?;
        return Ok(Utc::now() - age);
    }
    Err(CliError::Validation {
        field: field.to_owned(),
        reason: format!("'{raw}' is not an RFC 3339 timestamp, YYYY-MM-DD, or an age like 24h"),
    })
}
