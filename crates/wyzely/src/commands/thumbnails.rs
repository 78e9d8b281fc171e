//! Thumbnail command handlers.

use std::io::IsTerminal;
use std::time::Duration;

use chrono::Utc;
use indicatif::ProgressBar;
use tabled::Tabled;
use wyzely_core::{EventQuery, Session, Thumbnail};

use crate::cli::{GlobalOpts, ThumbnailsArgs, ThumbnailsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ThumbnailRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Device")]
    mac: String,
    #[tabled(rename = "Captured")]
    captured: String,
}

impl From<&Thumbnail> for ThumbnailRow {
    fn from(t: &Thumbnail) -> Self {
        Self {
            file: t
                .path
                .file_name()
                .map_or_else(|| t.path.display().to_string(), |n| {
                    n.to_string_lossy().into_owned()
                }),
            mac: t.mac.to_string(),
            captured: t.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    session: &Session,
    args: ThumbnailsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ThumbnailsCommand::Fetch {
            devices,
            tags,
            since,
            until,
            count,
            dir,
        } => {
            let begin = util::parse_time("since", &since)?;
            let end = match until {
                Some(raw) => util::parse_time("until", &raw)?,
                None => Utc::now(),
            };
            if begin >= end {
                return Err(CliError::Validation {
                    field: "since".into(),
                    reason: "--since must be earlier than --until".into(),
                });
            }

            let device_macs: Vec<String> = if devices.is_empty() {
                Vec::new()
            } else {
                util::resolve_devices(session, &devices)
                    .await?
                    .iter()
                    .map(|d| d.mac.to_string())
                    .collect()
            };

            let directory = dir.unwrap_or_else(|| session.config().home.join("thumbnails"));
            std::fs::create_dir_all(&directory)?;

            let query = EventQuery {
                device_macs,
                tags,
                count,
                begin,
                end,
            };

            // Spinner on stderr while the downloads run; stdout stays
            // clean for the rendered output.
            let spinner = (!global.quiet && std::io::stderr().is_terminal()).then(|| {
                let pb = ProgressBar::new_spinner();
                pb.set_message("downloading thumbnails...");
                pb.enable_steady_tick(Duration::from_millis(120));
                pb
            });
            let result = session.fetch_thumbnails(&directory, &query).await;
            if let Some(pb) = &spinner {
                pb.finish_and_clear();
            }
            let thumbnails = result?;

            let out = output::render_list(
                &global.output,
                &thumbnails,
                |t| ThumbnailRow::from(t),
                |t| t.path.display().to_string(),
            );
            output::print_output(&out, global.quiet);
            if !global.quiet {
                eprintln!(
                    "✓ {} new thumbnail{} in {}",
                    thumbnails.len(),
                    if thumbnails.len() == 1 { "" } else { "s" },
                    directory.display(),
                );
            }
            Ok(())
        }
    }
}
