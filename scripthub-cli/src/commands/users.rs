//! User commands
//!
//! Commands: create, show, find

use anyhow::Result;
use clap::{Parser, Subcommand};
use scripthub_core::{Id, NewUser, OptionExt, Storage};

use crate::output::Output;

#[derive(Parser, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UserCommands,
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Register a user
    Create(CreateUserArgs),
    /// Show a user by ID
    Show(ShowUserArgs),
    /// Find a user by username
    Find(FindUserArgs),
}

#[derive(Parser, Debug)]
pub struct CreateUserArgs {
    #[arg(long)]
    username: String,

    /// Stored as given; hash it before passing it in
    #[arg(long, env = "SCRIPTHUB_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Parser, Debug)]
pub struct ShowUserArgs {
    /// User ID
    id: Id,
}

#[derive(Parser, Debug)]
pub struct FindUserArgs {
    /// Exact username
    username: String,
}

pub async fn run_users(args: UsersArgs, storage: &dyn Storage, output: &Output) -> Result<()> {
    match args.command {
        UserCommands::Create(create_args) => {
            let user = storage
                .create_user(NewUser::new(create_args.username, create_args.password))
                .await;
            output.user(&user)
        }
        UserCommands::Show(show_args) => {
            let user = storage
                .get_user(show_args.id)
                .await
                .or_not_found("user", show_args.id)?;
            output.user(&user)
        }
        UserCommands::Find(find_args) => {
            let user = storage
                .get_user_by_username(&find_args.username)
                .await
                .or_not_found("user", &find_args.username)?;
            output.user(&user)
        }
    }
}
