//! scripthub CLI - browse and curate the script catalog
//!
//! Every invocation builds a fresh in-memory catalog (seeded unless disabled),
//! runs one command against it and exits. `scripthub session` keeps one
//! catalog alive across many commands read from stdin.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use scripthub_core::{CatalogConfig, MemStorage, OutputFormat};

mod commands;
mod output;
mod tracing_setup;

use commands::CatalogCommand;
use output::Output;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "scripthub",
    author,
    version,
    about = "Browse, search and curate a catalog of user-submitted scripts"
)]
struct Cli {
    /// Config file (default: ~/.scripthub/config.toml)
    #[arg(long, global = true, env = "SCRIPTHUB_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format (overrides [output] format)
    #[arg(long, global = true, value_enum)]
    format: Option<FormatArg>,

    /// Start with an empty catalog instead of the sample data
    #[arg(long, global = true)]
    no_seed: bool,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(flatten)]
    Catalog(CatalogCommand),
    /// Run catalog commands read line-by-line from stdin against one catalog
    Session(commands::session::SessionArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CatalogConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        level: config.logging.level.clone(),
    })
    .ok();

    let mut storage_config = config.storage.clone();
    if cli.no_seed {
        storage_config.seed = false;
    }
    let storage = MemStorage::from_config(&storage_config);

    let output = Output::new(cli.format.map(Into::into).unwrap_or(config.output.format));

    match cli.command {
        Commands::Catalog(command) => commands::run_catalog(command, &storage, &output).await,
        Commands::Session(args) => commands::run_session(args, &storage, &output).await,
    }
}
