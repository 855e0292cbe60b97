//! hobbylist - track progress through the series and books you follow
//!
//! Each command loads the active user's list from the local store, applies
//! one change and writes it back.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hobbylist::cli::{self, ConfigSubcommand};
use std::path::PathBuf;

/// hobbylist - track progress through the series and books you follow
#[derive(Parser, Debug)]
#[command(name = "hobbylist")]
#[command(about = "Track progress through the series and books you follow", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd', global = true)]
    debug: bool,

    /// Store file to use instead of the configured one
    #[arg(long, global = true, env = "HOBBYLIST_STORE")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

/// Main commands
#[derive(Subcommand, Debug)]
enum Command {
    #[command(flatten)]
    Tracker(cli::Command),
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let args = Args::parse();

    cli::init_logging(args.debug);
    tracing::debug!("Debug logging enabled");

    match args.command {
        Command::Tracker(cmd) => cli::handle_command(cmd, args.store),
        Command::Config { subcommand } => cli::handle_config_command(subcommand),
        Command::Version => {
            cli::display_version();
            Ok(())
        }
    }
}
