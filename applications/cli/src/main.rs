/// FlowDesk - user directory command-line client
use clap::Parser;
use flowdesk_cli::{
    commands::{Cli, Command},
    config::AppConfig,
    shell, Session,
};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flowdesk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    config.validate()?;
    tracing::debug!(base_url = %config.directory.base_url, "Configuration loaded");

    let mut session = Session::from_config(&config)?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Users(command) => session.users(command, &mut stdout).await?,
        Command::Dashboard => session.dashboard(&mut stdout).await?,
        Command::Shell => {
            let stdin = BufReader::new(tokio::io::stdin());
            shell::run(&mut session, stdin, &mut stdout).await?;
        }
    }

    Ok(())
}
