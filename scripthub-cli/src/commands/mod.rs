//! Command implementations for the scripthub CLI

pub mod categories;
pub mod scripts;
pub mod session;
pub mod users;

use anyhow::Result;
use clap::Subcommand;
use scripthub_core::Storage;

use crate::output::Output;

pub use session::run_session;

/// Commands that operate on the catalog. Available both as top-level
/// subcommands and as lines inside `scripthub session`.
#[derive(Subcommand, Debug)]
pub enum CatalogCommand {
    /// Browse, download and submit scripts
    Scripts(scripts::ScriptsArgs),
    /// Browse and create categories
    Categories(categories::CategoriesArgs),
    /// Register and look up users
    Users(users::UsersArgs),
}

pub async fn run_catalog(command: CatalogCommand, storage: &dyn Storage, output: &Output) -> Result<()> {
    match command {
        CatalogCommand::Scripts(args) => scripts::run_scripts(args, storage, output).await,
        CatalogCommand::Categories(args) => categories::run_categories(args, storage, output).await,
        CatalogCommand::Users(args) => users::run_users(args, storage, output).await,
    }
}
