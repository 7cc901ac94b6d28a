use crate::config::AppConfig;
use crate::errors::AppResult;
use clap::{Parser, Subcommand};
use tracing::debug;

pub mod commands;

/// Lightning channel balancer for lnd
#[derive(Parser)]
#[command(name = "lnb")]
#[command(about = "Lightning channel balancer for lnd")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub connection: commands::connection::ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// balance, status
    #[command(alias = "g", subcommand)]
    Get(commands::get::GetCommand),
    /// channels, contracts
    #[command(alias = "l", subcommand)]
    List(commands::list::ListCommand),
}

pub async fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();

    let mut config = AppConfig::get_defaults();
    cli.connection.apply(&mut config.lnd);
    debug!("Using configuration: {:?}", config);

    match cli.command {
        Commands::Get(command) => command.run(&config).await,
        Commands::List(command) => command.run(&config).await,
    }
}
