use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use artgrid::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "artgrid")]
#[command(about = "Browse and select artworks from the Art Institute of Chicago API")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.artgrid/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one page of artworks
    Page {
        /// Page number (starting at 1)
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Rows per page (defaults to table.page_size from config)
        #[arg(long)]
        rows: Option<u32>,
    },

    /// Select the first N artworks across pages and list them
    Select {
        /// Number of artworks to select
        #[arg(long, short = 'n')]
        count: usize,

        /// Page size used while walking the dataset
        #[arg(long)]
        rows: Option<u32>,
    },

    /// Interactive session: page through artworks and build a selection
    Browse {
        /// Rows per page
        #[arg(long)]
        rows: Option<u32>,
    },

    /// Write a configuration file with default values
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let load_config = || -> Result<Config> {
        match &cli.config {
            Some(path) => Config::from_file(path),
            None => Config::load(),
        }
    };

    match cli.command {
        Some(Commands::Page { page, rows }) => {
            cli::page::page_command(&load_config()?, page, rows)?
        }
        Some(Commands::Select { count, rows }) => {
            cli::select::select_command(&load_config()?, count, rows)?
        }
        Some(Commands::Browse { rows }) => cli::browse::browse_command(&load_config()?, rows)?,
        Some(Commands::Init { force }) => cli::init::init_command(cli.config.clone(), force)?,
        None => {
            // Default: interactive session
            cli::browse::browse_command(&load_config()?, None)?
        }
    }

    Ok(())
}
