//! Category commands
//!
//! Commands: list, show, create

use anyhow::Result;
use clap::{Parser, Subcommand};
use scripthub_core::{NewCategory, OptionExt, Storage};

use crate::output::Output;

#[derive(Parser, Debug)]
pub struct CategoriesArgs {
    #[command(subcommand)]
    pub command: CategoryCommands,
}

#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List all categories
    List,
    /// Show a category and the scripts filed under it
    Show(ShowCategoryArgs),
    /// Create a category
    Create(CreateCategoryArgs),
}

#[derive(Parser, Debug)]
pub struct ShowCategoryArgs {
    /// Category slug
    slug: String,
}

#[derive(Parser, Debug)]
pub struct CreateCategoryArgs {
    /// Display name
    #[arg(long)]
    name: String,

    /// URL-safe key scripts refer to
    #[arg(long)]
    slug: String,

    /// Icon class, e.g. "fas fa-gamepad"
    #[arg(long)]
    icon: String,

    /// Optional description
    #[arg(long)]
    description: Option<String>,
}

pub async fn run_categories(
    args: CategoriesArgs,
    storage: &dyn Storage,
    output: &Output,
) -> Result<()> {
    match args.command {
        CategoryCommands::List => output.categories(&storage.get_categories().await),
        CategoryCommands::Show(show_args) => {
            let category = storage
                .get_category(&show_args.slug)
                .await
                .or_not_found("category", &show_args.slug)?;
            let scripts = storage.get_scripts(Some(&category.slug), None).await;
            output.category(&category, &scripts)
        }
        CategoryCommands::Create(create_args) => {
            let mut new_category =
                NewCategory::new(create_args.name, create_args.slug, create_args.icon);
            new_category.description = create_args.description;

            let category = storage.create_category(new_category).await;
            output.categories(std::slice::from_ref(&category))
        }
    }
}
