//! Group command handlers.

use serde::Serialize;
use tabled::Tabled;
use wyzely_core::{DeviceGroup, Session, index};

use crate::cli::{GlobalOpts, GroupsArgs, GroupsCommand};
use crate::error::CliError;
use crate::output;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Devices")]
    devices: usize,
    #[tabled(rename = "Power")]
    power: String,
}

impl From<&DeviceGroup> for GroupRow {
    fn from(g: &DeviceGroup) -> Self {
        Self {
            name: g.name.clone(),
            id: g.id.to_string(),
            devices: g.devices.len(),
            power: if g.powered_on { "on" } else { "off" }.into(),
        }
    }
}

#[derive(Serialize, Tabled)]
struct MemberModelRow {
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "Model")]
    model: String,
}

fn detail(g: &DeviceGroup) -> String {
    let mut lines = vec![
        format!("Name:    {}", g.name),
        format!("ID:      {}", g.id),
        format!("Power:   {}", if g.powered_on { "on" } else { "off" }),
        format!("Devices: {}", g.devices.len()),
    ];
    for device in &g.devices {
        lines.push(format!(
            "  {} ({}, {:?}, power {})",
            device.display_name(),
            device.mac,
            device.connection,
            if device.is_powered_on() { "on" } else { "off" },
        ));
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    session: &Session,
    args: GroupsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        GroupsCommand::List => {
            let groups = session.groups().await?;
            let out = output::render_list(
                &global.output,
                &groups,
                |g| GroupRow::from(g),
                |g| g.name.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        GroupsCommand::Get { name } => {
            let group = session.group_named(&name).await?;
            let out = output::render_single(&global.output, &group, detail, |g| g.name.clone());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        GroupsCommand::Devices { name } => {
            let group = session.group_named(&name).await?;
            let targets = index::device_targets(&group.devices);
            let rows: Vec<MemberModelRow> = targets
                .into_iter()
                .map(|(mac, model)| MemberModelRow { mac, model })
                .collect();
            let out = output::render_list(
                &global.output,
                &rows,
                |r| MemberModelRow {
                    mac: r.mac.clone(),
                    model: r.model.clone(),
                },
                |r| r.mac.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
