//! Clap derive structures for the `wyzely` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.
//! This module must stay dependent on `clap` + `clap_complete` only so
//! `build.rs` can include it for man page generation.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// wyzely -- command-line client for Wyze smart home devices
#[derive(Debug, Parser)]
#[command(
    name = "wyzely",
    version,
    about = "Control Wyze devices from the command line",
    long_about = "An unofficial CLI for the Wyze cloud.\n\n\
        Authenticates with your account credentials and developer API key,\n\
        caches the refresh token locally, and talks to the same endpoints\n\
        the mobile app uses.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "WYZE_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds (overrides config)
    #[arg(long, env = "WYZE_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Wyzely home directory (refresh token cache, downloads)
    #[arg(long, env = "WYZE_HOME", global = true)]
    pub home: Option<PathBuf>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Inspect the device inventory
    #[command(alias = "dev", alias = "d")]
    Devices(DevicesArgs),

    /// Work with Wyze bulbs (mesh lights)
    #[command(alias = "b")]
    Bulbs(BulbsArgs),

    /// Inspect device groups
    #[command(alias = "grp", alias = "g")]
    Groups(GroupsArgs),

    /// Read and write device properties
    #[command(alias = "props", alias = "p")]
    Properties(PropertiesArgs),

    /// Download camera event thumbnails
    #[command(alias = "thumbs")]
    Thumbnails(ThumbnailsArgs),

    /// Inspect and refresh cached credentials
    Auth(AuthArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  DEVICES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct DevicesArgs {
    #[command(subcommand)]
    pub command: DevicesCommand,
}

#[derive(Debug, Subcommand)]
pub enum DevicesCommand {
    /// List all devices on the account
    #[command(alias = "ls")]
    List {
        /// Also fetch current property values (power state)
        #[arg(long, short = 'p')]
        properties: bool,
    },

    /// Get device details with current property values
    Get {
        /// Device nickname or MAC address
        device: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  BULBS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct BulbsArgs {
    #[command(subcommand)]
    pub command: BulbsCommand,
}

#[derive(Debug, Subcommand)]
pub enum BulbsCommand {
    /// List bulbs (the MeshLight product type)
    #[command(alias = "ls")]
    List,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  GROUPS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct GroupsArgs {
    #[command(subcommand)]
    pub command: GroupsCommand,
}

#[derive(Debug, Subcommand)]
pub enum GroupsCommand {
    /// List device groups with member count and power state
    #[command(alias = "ls")]
    List,

    /// Get one group with its member devices
    Get {
        /// Group name
        name: String,
    },

    /// List MAC -> model pairs for one group's members
    Devices {
        /// Group name
        name: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PROPERTIES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct PropertiesArgs {
    #[command(subcommand)]
    pub command: PropertiesCommand,
}

#[derive(Debug, Subcommand)]
pub enum PropertiesCommand {
    /// Read current property values for one or more devices
    Get {
        /// Device nicknames or MAC addresses
        #[arg(required = true)]
        devices: Vec<String>,

        /// Property names to fetch (comma-separated; default: all)
        #[arg(long, short = 'n', value_delimiter = ',')]
        names: Vec<String>,
    },

    /// Set properties on devices or a whole group in one batch
    Set {
        /// Device nicknames or MAC addresses
        devices: Vec<String>,

        /// Target every device in this named group instead
        #[arg(long, short = 'g', conflicts_with = "devices")]
        group: Option<String>,

        /// Property assignment, e.g. power_state=1 (repeatable)
        #[arg(long = "set", short = 's', value_name = "NAME=VALUE", required = true)]
        assignments: Vec<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  THUMBNAILS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ThumbnailsArgs {
    #[command(subcommand)]
    pub command: ThumbnailsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ThumbnailsCommand {
    /// Download new event thumbnails, skipping files already on disk
    Fetch {
        /// Restrict to these devices (nickname or MAC, repeatable)
        #[arg(long = "device", short = 'd', value_name = "DEVICE")]
        devices: Vec<String>,

        /// Restrict to these numeric event tags (repeatable)
        #[arg(long = "tag", short = 't', value_name = "TAG")]
        tags: Vec<i64>,

        /// Start of the time range (RFC 3339, YYYY-MM-DD, or an age like 24h)
        #[arg(long, default_value = "24h")]
        since: String,

        /// End of the time range (same formats as --since)
        #[arg(long)]
        until: Option<String>,

        /// Maximum number of events to fetch
        #[arg(long, short = 'n', default_value = "20")]
        count: u32,

        /// Download directory (default: <home>/thumbnails)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  AUTH
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommand,
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Show cached refresh-token validity and expiry
    Status,

    /// Authenticate and cache a refresh token
    Login {
        /// Discard any cached token and force a credential login
        #[arg(long, short = 'f')]
        force: bool,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create the config file with guided setup
    Init,

    /// Display current resolved configuration (secrets redacted)
    Show,

    /// Set a configuration value
    Set {
        /// Config key (username, key_id, home, output, color, timeout,
        /// password_hash, api_key -- the last two go to the keyring)
        key: String,

        /// Value to set
        value: String,
    },

    /// Print the config file location
    Path,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
