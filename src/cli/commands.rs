//! Subcommands and their arguments

use crate::core::store::ViewMode;
use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session token
    Login(LoginArgs),

    /// Forget the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Manage training batches
    #[command(subcommand)]
    Batches(EntityCommand),

    /// Manage candidates
    #[command(subcommand)]
    Candidates(EntityCommand),

    /// Manage batch enrollments
    #[command(subcommand)]
    Enrollments(EntityCommand),

    /// Manage batch sessions
    #[command(subcommand)]
    Sessions(EntityCommand),
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long, env = "BATCHDESK_EMAIL")]
    pub email: String,

    #[arg(long, env = "BATCHDESK_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Operations every entity supports
#[derive(Subcommand, Debug)]
pub enum EntityCommand {
    /// Fetch and print the list
    List(ListArgs),

    /// Create (id 0) or update (id > 0) from a JSON object
    Save(SaveArgs),

    /// Delete by id
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Page to show; pages accumulate, so page 2 shows the first two pages
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    #[arg(long, default_value_t = ViewMode::Table)]
    pub view: ViewMode,
}

#[derive(Args, Debug)]
pub struct SaveArgs {
    /// Entity fields in the API's camelCase JSON form
    #[arg(long)]
    pub json: String,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    pub id: i64,
}
