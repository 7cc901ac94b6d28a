use clap::{Args, Subcommand};
use tracing::info;

use crate::analysis::{
    aggregate, build_channel_report, build_contract_report, ChannelReport, ContractReport,
    OutputFormat, ReportFormatter, Window,
};
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::rpc::{ChannelFilter, ForwardingHistoryRequest, LndClient, NodeClient};
use crate::types::parse_channel_id;
use crate::utils::time::now_unix;

const PUBKEY_LEN: usize = 33;

/// channels, contracts
#[derive(Subcommand)]
pub enum ListCommand {
    /// List all open channels
    Channels(ChannelsCommand),
    /// List all forwarded Hash Time-Locked Contracts
    Contracts(ContractsCommand),
}

impl ListCommand {
    pub async fn run(&self, config: &AppConfig) -> AppResult<()> {
        match self {
            ListCommand::Channels(command) => command.run(config).await,
            ListCommand::Contracts(command) => command.run(config).await,
        }
    }
}

#[derive(Args)]
pub struct ChannelsCommand {
    /// Only list channels which are currently active
    #[arg(long, alias = "active_only")]
    active_only: bool,

    /// Only list channels which are currently inactive
    #[arg(long, alias = "inactive_only")]
    inactive_only: bool,

    /// Only list channels which are currently public
    #[arg(long, alias = "public_only")]
    public_only: bool,

    /// Only list channels which are currently private
    #[arg(long, alias = "private_only")]
    private_only: bool,

    /// Only display channels for a peer with a 66-character hex-encoded pubkey
    #[arg(long)]
    peer: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "console")]
    format: OutputFormat,
}

impl ChannelsCommand {
    fn filter(&self) -> AppResult<ChannelFilter> {
        let peer = self.peer.as_deref().map(parse_peer).transpose()?;
        Ok(ChannelFilter {
            active_only: self.active_only,
            inactive_only: self.inactive_only,
            public_only: self.public_only,
            private_only: self.private_only,
            peer,
        })
    }

    pub async fn run(&self, config: &AppConfig) -> AppResult<()> {
        let filter = self.filter()?;
        let client = LndClient::new(&config.lnd)?;
        let report = channel_report(
            &client,
            &filter,
            now_unix(),
            config.reporting.forwarding_max_events,
        )
        .await?;
        print!("{}", ReportFormatter::format_channels(&report, &self.format)?);
        Ok(())
    }
}

/// Decode a hex node key, which must be 33 bytes
pub fn parse_peer(peer: &str) -> AppResult<Vec<u8>> {
    let key = hex::decode(peer).map_err(|e| AppError::InvalidPeer(format!("{}: {}", peer, e)))?;
    if key.len() != PUBKEY_LEN {
        return Err(AppError::InvalidPeer(format!(
            "{}: expected {} bytes, got {}",
            peer,
            PUBKEY_LEN,
            key.len()
        )));
    }
    Ok(key)
}

/// Fetch channels and the trailing month of forwards, then aggregate against `now`
pub async fn channel_report<C: NodeClient>(
    client: &C,
    filter: &ChannelFilter,
    now: i64,
    max_events: u32,
) -> AppResult<ChannelReport> {
    let channels = client.list_channels(filter).await?;

    let request = ForwardingHistoryRequest {
        start_time: Window::Month.start(now),
        end_time: now,
        index_offset: 0,
        max_events,
    };
    let events = client.forwarding_history(&request).await?;
    info!(
        "Aggregating {} forwarding events over {} channels",
        events.len(),
        channels.len()
    );

    let sums = aggregate(&events, now);
    Ok(build_channel_report(&channels, &sums))
}

#[derive(Args)]
pub struct ContractsCommand {
    /// The starting time for the query, in seconds since the unix epoch
    #[arg(long, alias = "start_time")]
    start_time: Option<u64>,

    /// The end time for the query, in seconds since the unix epoch
    #[arg(long, alias = "end_time")]
    end_time: Option<u64>,

    /// The number of events to skip
    #[arg(long, alias = "index_offset")]
    index_offset: Option<u32>,

    /// The max number of events to return
    #[arg(long, alias = "max_events")]
    max_events: Option<u32>,

    /// Only display contracts for a channel with id in bbbbbb:iiii:p format
    #[arg(long)]
    channel: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "console")]
    format: OutputFormat,

    /// start_time [end_time] [index_offset] [max_events], for values not given as flags
    #[arg(value_name = "ARGS", num_args = 0..=4)]
    args: Vec<u64>,
}

impl ContractsCommand {
    /// Channel filter, 0 when none was given
    pub fn channel_filter(&self) -> AppResult<u64> {
        match &self.channel {
            Some(channel) => parse_channel_id(channel),
            None => Ok(0),
        }
    }

    /// Merge flags and positional values into a history request.
    ///
    /// Positional values fill, in order, whichever parameters were not set by flags.
    pub fn history_request(
        &self,
        now: i64,
        default_max_events: u32,
    ) -> AppResult<ForwardingHistoryRequest> {
        let mut positional = self.args.iter().copied();

        let start_time = self
            .start_time
            .or_else(|| positional.next())
            .map(|t| t as i64)
            .unwrap_or_else(|| Window::Month.start(now));
        let end_time = self
            .end_time
            .or_else(|| positional.next())
            .map(|t| t as i64)
            .unwrap_or(0);
        let index_offset = match self.index_offset {
            Some(offset) => offset,
            None => positional_u32(positional.next(), "index_offset")?.unwrap_or(0),
        };
        let max_events = match self.max_events {
            Some(max) => max,
            None => positional_u32(positional.next(), "max_events")?.unwrap_or(default_max_events),
        };

        Ok(ForwardingHistoryRequest {
            start_time,
            end_time,
            index_offset,
            max_events,
        })
    }

    pub async fn run(&self, config: &AppConfig) -> AppResult<()> {
        // A malformed --channel must fail before anything is fetched
        let channel_filter = self.channel_filter()?;
        let request = self.history_request(now_unix(), config.reporting.contracts_max_events)?;

        let client = LndClient::new(&config.lnd)?;
        let report = contract_report(&client, &request, channel_filter).await?;
        print!("{}", ReportFormatter::format_contracts(&report, &self.format)?);
        Ok(())
    }
}

fn positional_u32(value: Option<u64>, name: &str) -> AppResult<Option<u32>> {
    value
        .map(|v| {
            u32::try_from(v).map_err(|_| {
                AppError::InvalidData(format!("{} {} exceeds {}", name, v, u32::MAX))
            })
        })
        .transpose()
}

/// Fetch a page of forwarding history and list it newest first
pub async fn contract_report<C: NodeClient>(
    client: &C,
    request: &ForwardingHistoryRequest,
    channel_filter: u64,
) -> AppResult<ContractReport> {
    let events = client.forwarding_history(request).await?;
    Ok(build_contract_report(&events, channel_filter))
}
