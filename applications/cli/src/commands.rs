/// Command-line grammar shared by one-shot invocations and the shell
use clap::{Args, Parser, Subcommand};
use flowdesk_core::{CreateUserData, UserId, UserPatch};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "flowdesk")]
#[command(about = "FlowDesk user directory", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "FLOWDESK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage directory users
    #[command(subcommand)]
    Users(UsersCommand),
    /// Show summary figures for the directory
    Dashboard,
    /// Read commands from stdin, keeping one cache across them
    Shell,
}

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// List users, optionally filtered
    List {
        /// Case-insensitive match on name, email or username
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show one user in detail
    Show {
        id: UserId,
    },
    /// Add a user
    Create(UserForm),
    /// Change some fields of a user
    Update {
        id: UserId,

        #[command(flatten)]
        fields: PatchForm,
    },
    /// Remove a user
    Delete {
        id: UserId,
    },
    /// Fetch the list again, ignoring the cache
    Refresh,
}

#[derive(Debug, Clone, Args)]
pub struct UserForm {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub website: String,
}

#[derive(Debug, Clone, Default, Args)]
pub struct PatchForm {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub website: Option<String>,
}

impl From<UserForm> for CreateUserData {
    fn from(form: UserForm) -> Self {
        Self {
            name: form.name,
            username: form.username,
            email: form.email,
            phone: form.phone,
            website: form.website,
        }
    }
}

impl From<PatchForm> for UserPatch {
    fn from(form: PatchForm) -> Self {
        Self {
            name: form.name,
            username: form.username,
            email: form.email,
            phone: form.phone,
            website: form.website,
        }
    }
}

/// One line typed into the shell.
#[derive(Debug, Parser)]
#[command(name = "flowdesk", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Debug, Subcommand)]
pub enum ShellCommand {
    #[command(flatten)]
    Users(UsersCommand),
    /// Show summary figures for the directory
    Dashboard,
    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}
