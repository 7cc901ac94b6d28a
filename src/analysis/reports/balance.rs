//! Balance summary: one aggregate row across all channels

use serde::Serialize;

use super::utils::{export_json, push_header};
use super::OutputFormat;
use crate::analysis::metrics::TotalBalance;
use crate::errors::AppResult;
use crate::types::ChannelRecord;
use crate::utils::math::round_percentage;

const TITLE: &str = " Capacity |    Local |   Remote | CommitFee| Ratio | Total In Out Amount| Efficiency";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceReport {
    pub channel_count: usize,
    pub total: TotalBalance,
}

pub fn build_balance_report(channels: &[ChannelRecord]) -> BalanceReport {
    BalanceReport {
        channel_count: channels.len(),
        total: TotalBalance::from_channels(channels),
    }
}

pub fn format_balance_report(report: &BalanceReport, format: &OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Console => {
            let mut output = String::new();
            push_header(&mut output, TITLE);

            let b = &report.total;
            output.push_str(&format!(
                "{:>9} |{:>9} |{:>9} |{:>9} | {:>5}% |{:>9} {:<9} |{:>5}%\n",
                b.capacity,
                b.local_balance,
                b.remote_balance,
                b.commit_fee,
                round_percentage(b.ratio),
                b.amount_in,
                b.amount_out,
                round_percentage(b.efficiency),
            ));
            Ok(output)
        }
        OutputFormat::Json => export_json(report),
    }
}
