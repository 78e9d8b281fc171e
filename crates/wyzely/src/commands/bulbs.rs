//! Bulb command handlers.

use tabled::Tabled;
use wyzely_core::{Device, Session};

use crate::cli::{BulbsArgs, BulbsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct BulbRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Connection")]
    connection: String,
}

impl From<&Device> for BulbRow {
    fn from(d: &Device) -> Self {
        Self {
            name: d.display_name().to_owned(),
            mac: d.mac.to_string(),
            model: d.model.clone().unwrap_or_default(),
            connection: format!("{:?}", d.connection),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    session: &Session,
    args: BulbsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        BulbsCommand::List => {
            let bulbs = session.bulbs().await?;
            let out = output::render_list(
                &global.output,
                &bulbs,
                |d| BulbRow::from(d),
                |d| d.mac.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
