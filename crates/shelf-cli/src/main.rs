//! Shelf CLI
//!
//! Command-line and terminal interface for Shelf - a personal book-tracking list.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use shelf_core::{samples, Config, Library};

mod commands;
mod output;
mod tui;

use output::{Output, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(about = "Shelf - Personal book-tracking list")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Start with an empty library instead of the sample books
    #[arg(long, global = true)]
    empty: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the TUI interface
    Tui,
    /// List all books
    #[command(alias = "ls")]
    List,
    /// Find the first book whose title contains the query (case-insensitive)
    Find {
        /// Part of the title to look for
        query: String,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, seed_samples, log_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    // Config commands don't need a library
    if let Some(Commands::Config { command }) = &cli.command {
        init_cli_logging();
        return handle_config_command(command.clone(), &output);
    }

    let config = Config::load()?;

    // Handle TUI (default when no command given)
    if matches!(&cli.command, Some(Commands::Tui) | None) {
        return tui::run(&config, cli.empty);
    }

    init_cli_logging();
    let library = open_library(&config, cli.empty);

    match cli.command {
        Some(Commands::List) => commands::book::list(&library, &output),
        Some(Commands::Find { query }) => commands::book::find(&library, query, &output),
        // Handled above
        Some(Commands::Tui) | Some(Commands::Config { .. }) | None => Ok(()),
    }
}

fn handle_config_command(command: Option<ConfigCommands>, output: &Output) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(output),
        Some(ConfigCommands::Set { key, value }) => commands::config::set(key, value, output),
    }
}

/// Create the session library, seeded with the sample books unless disabled
fn open_library(config: &Config, empty: bool) -> Library {
    let mut library = Library::new();
    if config.seed_samples && !empty {
        samples::seed(&mut library);
    }
    library
}

/// Log to stderr, filtered by SHELF_LOG (warnings only by default)
fn init_cli_logging() {
    let filter = EnvFilter::try_from_env("SHELF_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    // Ignore error if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
