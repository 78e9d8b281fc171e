//! Command dispatch: bridges CLI args -> Session calls -> output formatting.

pub mod auth;
pub mod bulbs;
pub mod config_cmd;
pub mod devices;
pub mod groups;
pub mod properties;
pub mod thumbnails;
pub mod util;

use wyzely_core::Session;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a session-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    session: &Session,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Devices(args) => devices::handle(session, args, global).await,
        Command::Bulbs(args) => bulbs::handle(session, args, global).await,
        Command::Groups(args) => groups::handle(session, args, global).await,
        Command::Properties(args) => properties::handle(session, args, global).await,
        Command::Thumbnails(args) => thumbnails::handle(session, args, global).await,
        // Auth, Config, and Completions are handled before dispatch
        Command::Auth(_) | Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
