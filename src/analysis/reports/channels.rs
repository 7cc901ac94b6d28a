//! Channel listing with rolling forwarding volume and fees
//!
//! Rows are ordered by channel id, newest funding first, and followed by a
//! totals row.

use rust_decimal::Decimal;
use serde::Serialize;

use super::utils::{export_json, push_header, separator};
use super::OutputFormat;
use crate::analysis::forwarding::{ChannelHtlcSummary, SumHtlc};
use crate::analysis::metrics::{format_fee, ChannelMetrics, TotalChannels};
use crate::errors::AppResult;
use crate::types::{format_channel_id, ChannelRecord, Sat};
use crate::utils::math::round_percentage;

const TITLE: &str = "  Num |    Channel ID | Public Key\
| Capacity |    Local |   Remote | Ratio \
|   Day In Out Amount\
| Month In Out Amount\
|Mon Fee\
| Total In Out Amount\
| Effcy";

/// One channel with its forwarding summary and derived metrics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelRow {
    pub position: usize,
    pub channel_id: u64,
    pub short_channel_id: String,
    pub active: bool,
    pub pubkey_prefix: String,
    pub capacity: Sat,
    pub local_balance: Sat,
    pub remote_balance: Sat,
    pub total_received: Sat,
    pub total_sent: Sat,
    pub forwarding: ChannelHtlcSummary,
    pub metrics: ChannelMetrics,
}

impl ChannelRow {
    fn active_marker(&self) -> &'static str {
        if self.active {
            " "
        } else {
            "-"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelReport {
    pub rows: Vec<ChannelRow>,
    pub total: TotalChannels,
}

/// Join channels with their forwarding summaries, sort, and total them up
pub fn build_channel_report(channels: &[ChannelRecord], sums: &SumHtlc) -> ChannelReport {
    let mut sorted: Vec<&ChannelRecord> = channels.iter().collect();
    sorted.sort_by(|a, b| b.channel_id.cmp(&a.channel_id));

    let mut total = TotalChannels::default();
    let rows = sorted
        .into_iter()
        .enumerate()
        .map(|(i, channel)| {
            let forwarding = sums.get(&channel.channel_id).copied().unwrap_or_default();
            let metrics = ChannelMetrics::compute(channel, &forwarding);
            total.add_channel(channel, &forwarding, &metrics);

            ChannelRow {
                position: i + 1,
                channel_id: channel.channel_id,
                short_channel_id: format_channel_id(channel.channel_id),
                active: channel.active,
                pubkey_prefix: channel.pubkey_prefix(),
                capacity: channel.capacity,
                local_balance: channel.local_balance,
                remote_balance: channel.remote_balance,
                total_received: channel.total_received,
                total_sent: channel.total_sent,
                forwarding,
                metrics,
            }
        })
        .collect();
    total.finalise();

    ChannelReport { rows, total }
}

#[allow(clippy::too_many_arguments)]
fn format_row(
    position: usize,
    marker: &str,
    channel: &str,
    pubkey: &str,
    balances: [Sat; 3],
    ratio: f64,
    day: [Sat; 2],
    month: [Sat; 2],
    month_fee: Decimal,
    lifetime: [Sat; 2],
    efficiency: f64,
) -> String {
    format!(
        "{:>5}{}|{:>11} |{:>10} |{:>9} |{:>9} |{:>9} |{:>5}% |{:>9} {:<9} |{:>9} {:<9} |{:>6} |{:>9} {:<9} |{:>5}%\n",
        position,
        marker,
        channel,
        pubkey,
        balances[0],
        balances[1],
        balances[2],
        round_percentage(ratio),
        day[0],
        day[1],
        month[0],
        month[1],
        format_fee(month_fee),
        lifetime[0],
        lifetime[1],
        round_percentage(efficiency),
    )
}

pub fn format_channel_report(report: &ChannelReport, format: &OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Console => {
            let mut output = String::new();
            push_header(&mut output, TITLE);

            for row in &report.rows {
                output.push_str(&format_row(
                    row.position,
                    row.active_marker(),
                    &row.short_channel_id,
                    &row.pubkey_prefix,
                    [row.capacity, row.local_balance, row.remote_balance],
                    row.metrics.ratio,
                    [row.forwarding.day.amount_in, row.forwarding.day.amount_out],
                    [row.forwarding.month.amount_in, row.forwarding.month.amount_out],
                    row.metrics.month_fee,
                    [row.total_received, row.total_sent],
                    row.metrics.efficiency,
                ));
            }

            let t = &report.total;
            output.push_str(&separator(TITLE));
            output.push('\n');
            output.push_str(&format_row(
                report.rows.len(),
                " ",
                "              ",
                "  ",
                [
                    t.balance.capacity,
                    t.balance.local_balance,
                    t.balance.remote_balance,
                ],
                t.balance.ratio,
                [t.day_amount_in, t.day_amount_out],
                [t.month_amount_in, t.month_amount_out],
                t.month_fee,
                [t.balance.amount_in, t.balance.amount_out],
                t.balance.efficiency,
            ));
            Ok(output)
        }
        OutputFormat::Json => export_json(report),
    }
}
