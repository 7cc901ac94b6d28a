use clap::{Args, Subcommand};
use tracing::info;

use crate::analysis::reports::utils::export_json;
use crate::analysis::{build_balance_report, BalanceReport, OutputFormat, ReportFormatter};
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::rpc::{ChannelFilter, LndClient, NodeClient};

/// balance, status
#[derive(Subcommand)]
pub enum GetCommand {
    /// Get lnd total channels' balance
    #[command(alias = "b")]
    Balance(BalanceCommand),
    /// Get lnd status
    #[command(alias = "s")]
    Status(StatusCommand),
}

impl GetCommand {
    pub async fn run(&self, config: &AppConfig) -> AppResult<()> {
        match self {
            GetCommand::Balance(command) => command.run(config).await,
            GetCommand::Status(command) => command.run(config).await,
        }
    }
}

#[derive(Args)]
pub struct BalanceCommand {
    /// Only count channels which are currently active
    #[arg(long)]
    active: bool,

    /// Only count channels which are currently inactive
    #[arg(long)]
    inactive: bool,

    /// Only count channels which are currently public
    #[arg(long)]
    public: bool,

    /// Only count channels which are currently private
    #[arg(long)]
    private: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "console")]
    format: OutputFormat,
}

impl BalanceCommand {
    fn filter(&self) -> ChannelFilter {
        ChannelFilter {
            active_only: self.active,
            inactive_only: self.inactive,
            public_only: self.public,
            private_only: self.private,
            peer: None,
        }
    }

    pub async fn run(&self, config: &AppConfig) -> AppResult<()> {
        let client = LndClient::new(&config.lnd)?;
        let report = balance_report(&client, &self.filter()).await?;
        print!("{}", ReportFormatter::format_balance(&report, &self.format)?);
        Ok(())
    }
}

/// Fetch channels and total them up
pub async fn balance_report<C: NodeClient>(
    client: &C,
    filter: &ChannelFilter,
) -> AppResult<BalanceReport> {
    let channels = client.list_channels(filter).await?;
    info!("Computing balance over {} channels", channels.len());
    Ok(build_balance_report(&channels))
}

#[derive(Args)]
pub struct StatusCommand {}

impl StatusCommand {
    pub async fn run(&self, config: &AppConfig) -> AppResult<()> {
        let client = LndClient::new(&config.lnd)?;
        let info = client.get_info().await?;
        print!("{}", export_json(&info)?);
        Ok(())
    }
}
