//! Report formatting and output generation
//!
//! Provides the three table views via the [`ReportFormatter`] facade.
//! Supports Console and JSON output formats.

pub mod balance;
pub mod channels;
pub mod contracts;
pub mod utils;

use crate::errors::AppResult;

pub use balance::{build_balance_report, BalanceReport};
pub use channels::{build_channel_report, ChannelReport, ChannelRow};
pub use contracts::{build_contract_report, ContractReport, ContractRow};

/// Output format options for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
}

/// Facade for all report formatting operations
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn format_balance(r: &BalanceReport, f: &OutputFormat) -> AppResult<String> {
        balance::format_balance_report(r, f)
    }
    pub fn format_channels(r: &ChannelReport, f: &OutputFormat) -> AppResult<String> {
        channels::format_channel_report(r, f)
    }
    pub fn format_contracts(r: &ContractReport, f: &OutputFormat) -> AppResult<String> {
        contracts::format_contract_report(r, f)
    }
}
