//! Device command handlers.

use tabled::Tabled;
use wyzely_core::{Device, Session};

use crate::cli::{DevicesArgs, DevicesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Type")]
    product_type: String,
    #[tabled(rename = "Connection")]
    connection: String,
    #[tabled(rename = "Power")]
    power: String,
}

impl DeviceRow {
    fn new(d: &Device, with_properties: bool) -> Self {
        Self {
            name: d.display_name().to_owned(),
            mac: d.mac.to_string(),
            model: d.model.clone().unwrap_or_default(),
            product_type: d.product_type.to_string(),
            connection: format!("{:?}", d.connection),
            power: if with_properties {
                power_label(d).into()
            } else {
                "-".into()
            },
        }
    }
}

fn power_label(d: &Device) -> &'static str {
    if d.is_powered_on() { "on" } else { "off" }
}

fn detail(d: &Device) -> String {
    let mut lines = vec![
        format!("Name:       {}", d.display_name()),
        format!("MAC:        {}", d.mac),
        format!("Model:      {}", d.model.as_deref().unwrap_or("-")),
        format!("Type:       {}", d.product_type),
        format!("Connection: {:?}", d.connection),
        format!("Power:      {}", power_label(d)),
    ];
    if !d.properties.is_empty() {
        lines.push("Properties:".into());
        for (name, value) in &d.properties {
            lines.push(format!("  {name} = {value}"));
        }
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    session: &Session,
    args: DevicesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        DevicesCommand::List { properties } => {
            let devices = if properties {
                session.devices_with_properties().await?
            } else {
                session.devices().await?
            };
            let out = output::render_list(
                &global.output,
                &devices,
                |d| DeviceRow::new(d, properties),
                |d| d.mac.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DevicesCommand::Get { device } => {
            let found = session.device_named(&device).await?;
            let out = output::render_single(&global.output, &found, detail, |d| d.mac.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
