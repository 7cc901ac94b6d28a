//! Forwarding event ("contract") listing, newest first

use serde::Serialize;

use super::utils::{export_json, push_header};
use super::OutputFormat;
use crate::errors::AppResult;
use crate::types::{format_channel_id, ForwardingEvent, Sat};
use crate::utils::time::timestamp_to_rfc3339;

const TITLE: &str = "  Num \
|            Time           \
|  Timestamp \
|  Channel In   \
|  Channel Out  \
| Amount In\
|Amount Out\
| Fee Msat";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractRow {
    pub position: usize,
    pub time: String,
    pub timestamp: i64,
    pub channel_in: u64,
    pub channel_out: u64,
    pub amount_in: Sat,
    pub amount_out: Sat,
    pub fee_msat: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractReport {
    /// Channel filter in effect, 0 for none
    pub channel_filter: u64,
    pub rows: Vec<ContractRow>,
}

/// Sort events newest first, then keep those touching `channel_filter` (0 keeps all).
/// Positions are numbered over the kept rows.
pub fn build_contract_report(events: &[ForwardingEvent], channel_filter: u64) -> ContractReport {
    let mut sorted: Vec<&ForwardingEvent> = events.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let rows = sorted
        .into_iter()
        .filter(|e| {
            channel_filter == 0 || e.channel_in == channel_filter || e.channel_out == channel_filter
        })
        .enumerate()
        .map(|(i, e)| ContractRow {
            position: i + 1,
            time: timestamp_to_rfc3339(e.timestamp),
            timestamp: e.timestamp,
            channel_in: e.channel_in,
            channel_out: e.channel_out,
            amount_in: e.amount_in,
            amount_out: e.amount_out,
            fee_msat: e.fee_msat,
        })
        .collect();

    ContractReport {
        channel_filter,
        rows,
    }
}

pub fn format_contract_report(report: &ContractReport, format: &OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Console => {
            let mut output = String::new();
            push_header(&mut output, TITLE);

            for row in &report.rows {
                output.push_str(&format!(
                    "{:>5} | {:>24} | {:>10} |{:>10} |{:>10} |{:>9} |{:>9} |{:>6}\n",
                    row.position,
                    row.time,
                    row.timestamp,
                    format_channel_id(row.channel_in),
                    format_channel_id(row.channel_out),
                    row.amount_in,
                    row.amount_out,
                    row.fee_msat,
                ));
            }
            Ok(output)
        }
        OutputFormat::Json => export_json(report),
    }
}
