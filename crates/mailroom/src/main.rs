//! Operator tool for delivering items into player inboxes.
//!
//! Player saves live in `SAVE_DATA_DIR` (or the platform data directory).
//! Run with: `mailroom <command>`

mod commands;
mod config;
mod context;
mod dirs;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{CreatePlayer, Deliver, ListPlayers, ShowInbox};

use crate::config::MailroomConfig;
use crate::context::MailContext;

/// Deliver items into player inboxes
#[derive(Parser)]
#[command(name = "mailroom")]
#[command(about = "Deliver items to online and offline players", long_about = None)]
#[command(version)]
struct Cli {
    /// Custom save directory (overrides SAVE_DATA_DIR)
    #[arg(short, long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// RON item catalog (overrides ITEM_CATALOG)
    #[arg(short, long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Create an empty, offline player record
    CreatePlayer(CreatePlayer),

    /// Deliver one item to a player
    Deliver(Deliver),

    /// Show the inbox of a player
    Inbox(ShowInbox),

    /// List stored players
    ListPlayers(ListPlayers),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for SAVE_DATA_DIR and other env vars)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = MailroomConfig::from_env().with_overrides(cli.data_dir, cli.catalog);

    let _log_guard = logging::setup_logging(config.log_dir.as_deref())?;

    let ctx = MailContext::build(config)?;

    match cli.command {
        Command::CreatePlayer(cmd) => cmd.execute(&ctx),
        Command::Deliver(cmd) => cmd.execute(&ctx),
        Command::Inbox(cmd) => cmd.execute(&ctx),
        Command::ListPlayers(cmd) => cmd.execute(&ctx),
    }
}
