//! Property command handlers.

use std::collections::BTreeMap;

use serde::Serialize;
use tabled::Tabled;
use wyzely_core::{Session, index};

use crate::cli::{GlobalOpts, PropertiesArgs, PropertiesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

/// One property value, flattened for table/plain/JSON output.
#[derive(Clone, Serialize, Tabled)]
struct PropertyRow {
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "Property")]
    property: String,
    #[tabled(rename = "Value")]
    value: String,
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    session: &Session,
    args: PropertiesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        PropertiesCommand::Get { devices, names } => {
            let matched = util::resolve_devices(session, &devices).await?;
            let macs: Vec<String> = matched.iter().map(|d| d.mac.to_string()).collect();
            let props = session.device_properties(&macs, &names).await?;

            let rows: Vec<PropertyRow> = props
                .iter()
                .flat_map(|p| {
                    p.properties.iter().map(|(property, value)| PropertyRow {
                        mac: p.mac.to_string(),
                        property: property.clone(),
                        value: value.clone(),
                    })
                })
                .collect();
            let out = output::render_list(
                &global.output,
                &rows,
                Clone::clone,
                |r| format!("{} {}={}", r.mac, r.property, r.value),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        PropertiesCommand::Set {
            devices,
            group,
            assignments,
        } => {
            let mut values = BTreeMap::new();
            for assignment in &assignments {
                let (name, value) = util::parse_assignment(assignment)?;
                values.insert(name, value);
            }

            let targets = if let Some(group_name) = group {
                let found = session.group_named(&group_name).await?;
                index::device_targets(&found.devices)
            } else {
                if devices.is_empty() {
                    return Err(CliError::Validation {
                        field: "devices".into(),
                        reason: "provide at least one device, or --group".into(),
                    });
                }
                let matched = util::resolve_devices(session, &devices).await?;
                index::device_targets(&matched)
            };

            if targets.is_empty() {
                if !global.quiet {
                    eprintln!("Nothing to do: no target devices");
                }
                return Ok(());
            }

            session.set_properties(&targets, &values).await?;
            if !global.quiet {
                eprintln!(
                    "Set {} propert{} on {} device{}",
                    values.len(),
                    if values.len() == 1 { "y" } else { "ies" },
                    targets.len(),
                    if targets.len() == 1 { "" } else { "s" },
                );
            }
            Ok(())
        }
    }
}
