//! FlowDesk command-line front end.
//!
//! A [`Session`] owns one controller and its cache, so commands run through
//! the same session see each other's mutations.

pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod shell;

use commands::UsersCommand;
use config::AppConfig;
use error::{CliError, Result};
use flowdesk_client::{DirectoryClient, UserGateway};
use flowdesk_core::UserPatch;
use flowdesk_sync::{Notice, UserCache, UserListController};
use std::io::Write;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

/// Controller plus the display settings commands render with.
pub struct Session<G = DirectoryClient> {
    controller: UserListController<G>,
    notices: broadcast::Receiver<Notice>,
    show_email: bool,
}

impl Session<DirectoryClient> {
    /// Build a session talking to the configured directory.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let client = DirectoryClient::new(config.client_config())?;
        let cache = Arc::new(RwLock::new(UserCache::new()));
        let controller = UserListController::new(Arc::new(client), cache)
            .with_stale_after(config.cache.stale_after());

        Ok(Self::new(controller, config.display.show_email))
    }
}

impl<G: UserGateway + 'static> Session<G> {
    pub fn new(controller: UserListController<G>, show_email: bool) -> Self {
        let notices = controller.subscribe();
        Self {
            controller,
            notices,
            show_email,
        }
    }

    pub fn controller(&self) -> &UserListController<G> {
        &self.controller
    }

    /// Run a `users` subcommand, then print any notices it produced.
    pub async fn users<W: Write>(&mut self, command: UsersCommand, out: &mut W) -> Result<()> {
        let result = self.dispatch(command, out).await;
        self.flush_notices(out)?;
        result
    }

    /// Print the dashboard figures.
    pub async fn dashboard<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let result = self.controller.stats().await;
        self.flush_notices(out)?;
        render::dashboard(out, &result?)?;
        Ok(())
    }

    async fn dispatch<W: Write>(&mut self, command: UsersCommand, out: &mut W) -> Result<()> {
        match command {
            UsersCommand::List { search } => {
                let query = search.unwrap_or_default();
                let users = self.controller.search(&query).await?;
                render::user_list(out, &users, &query, self.show_email)?;
            }
            UsersCommand::Show { id } => {
                let user = self.controller.get(id).await?;
                render::user_detail(out, &user)?;
            }
            UsersCommand::Create(form) => {
                let user = self.controller.create(form.into()).await?;
                writeln!(out, "Created user {}", user.id)?;
            }
            UsersCommand::Update { id, fields } => {
                let patch = UserPatch::from(fields);
                if patch.is_empty() {
                    return Err(CliError::Usage(
                        "update needs at least one field to change".to_string(),
                    ));
                }
                if let Some(user) = self.controller.update(id, patch).await? {
                    render::user_detail(out, &user)?;
                }
            }
            UsersCommand::Delete { id } => {
                self.controller.delete(id).await?;
            }
            UsersCommand::Refresh => {
                let users = self.controller.refresh().await?;
                writeln!(out, "Loaded {}", flowdesk_core::count_label(users.len()))?;
            }
        }

        Ok(())
    }

    fn flush_notices<W: Write>(&mut self, out: &mut W) -> Result<()> {
        loop {
            match self.notices.try_recv() {
                Ok(notice) => render::notice(out, &notice)?,
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "Dropped old notices");
                }
                Err(_) => return Ok(()),
            }
        }
    }
}
