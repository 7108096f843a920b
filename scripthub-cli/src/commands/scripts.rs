//! Script commands
//!
//! Commands: list, show, download, featured, popular, create

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scripthub_core::{Id, NewScript, OptionExt, Storage};
use tracing::info;

use crate::output::Output;

#[derive(Parser, Debug)]
pub struct ScriptsArgs {
    #[command(subcommand)]
    pub command: ScriptCommands,
}

#[derive(Subcommand, Debug)]
pub enum ScriptCommands {
    /// List scripts, most viewed first
    List(ListScriptsArgs),
    /// Show a script with its code (records a view)
    Show(ShowScriptArgs),
    /// Write a script's code to stdout or a file (records a download)
    Download(DownloadScriptArgs),
    /// List featured scripts
    Featured,
    /// List popular scripts, most viewed first
    Popular,
    /// Submit a new script
    Create(CreateScriptArgs),
}

#[derive(Parser, Debug)]
pub struct ListScriptsArgs {
    /// Only scripts filed under this category slug ("all" disables the filter)
    #[arg(long, short = 'c')]
    category: Option<String>,

    /// Case-insensitive text to find in name or description
    #[arg(long, short = 's')]
    search: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ShowScriptArgs {
    /// Script ID
    id: Id,

    /// Don't count this as a view
    #[arg(long)]
    no_track: bool,
}

#[derive(Parser, Debug)]
pub struct DownloadScriptArgs {
    /// Script ID
    id: Id,

    /// Output file (default: stdout)
    #[arg(long = "out", short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct CreateScriptArgs {
    /// Display name
    #[arg(long)]
    name: String,

    /// Short description shown in listings
    #[arg(long)]
    description: String,

    /// Category slug (not checked against existing categories)
    #[arg(long)]
    category: String,

    /// Script source inline
    #[arg(long, conflicts_with = "code_file", required_unless_present = "code_file")]
    code: Option<String>,

    /// Read script source from a file
    #[arg(long, value_name = "PATH")]
    code_file: Option<PathBuf>,

    /// Preview image URL
    #[arg(long)]
    image: Option<String>,

    /// Status label (default: active)
    #[arg(long)]
    status: Option<String>,
}

// === Command Implementations ===

pub async fn run_scripts(args: ScriptsArgs, storage: &dyn Storage, output: &Output) -> Result<()> {
    match args.command {
        ScriptCommands::List(list_args) => run_list(list_args, storage, output).await,
        ScriptCommands::Show(show_args) => run_show(show_args, storage, output).await,
        ScriptCommands::Download(download_args) => run_download(download_args, storage, output).await,
        ScriptCommands::Featured => output.scripts(&storage.get_featured_scripts().await),
        ScriptCommands::Popular => output.scripts(&storage.get_popular_scripts().await),
        ScriptCommands::Create(create_args) => run_create(create_args, storage, output).await,
    }
}

async fn run_list(args: ListScriptsArgs, storage: &dyn Storage, output: &Output) -> Result<()> {
    let scripts = storage
        .get_scripts(args.category.as_deref(), args.search.as_deref())
        .await;
    output.scripts(&scripts)
}

async fn run_show(args: ShowScriptArgs, storage: &dyn Storage, output: &Output) -> Result<()> {
    if !args.no_track {
        storage.increment_script_views(args.id).await;
    }

    let script = storage.get_script(args.id).await.or_not_found("script", args.id)?;
    output.script(&script)
}

async fn run_download(args: DownloadScriptArgs, storage: &dyn Storage, output: &Output) -> Result<()> {
    let script = storage.get_script(args.id).await.or_not_found("script", args.id)?;
    storage.increment_script_downloads(script.id).await;

    match args.output {
        Some(path) => {
            tokio::fs::write(&path, &script.code)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Saved script {} to {}", script.id, path.display());
            output.message(&format!("Saved '{}' to {}", script.name, path.display()))
        }
        None => {
            println!("{}", script.code);
            Ok(())
        }
    }
}

async fn run_create(args: CreateScriptArgs, storage: &dyn Storage, output: &Output) -> Result<()> {
    let code = match (args.code, args.code_file) {
        (Some(code), _) => code,
        (None, Some(path)) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => anyhow::bail!("Either --code or --code-file is required"),
    };

    let mut new_script = NewScript::new(args.name, args.description, args.category, code);
    new_script.image = args.image;
    new_script.status = args.status;

    let script = storage.create_script(new_script).await;
    output.script(&script)
}
