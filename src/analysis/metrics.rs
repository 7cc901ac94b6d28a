//! Derived channel metrics
//!
//! Balance ratio, capacity efficiency and fee display values per channel and
//! across all channels. Ratios are 0 whenever their denominator is not
//! positive. Fee totals are kept as exact decimals and rounded only when
//! rendered.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::forwarding::ChannelHtlcSummary;
use crate::types::{ChannelRecord, Sat};
use crate::utils::currency::msat_to_sat_decimal;
use crate::utils::math::safe_percentage;

/// Fees below this many satoshis are shown with millisatoshi precision
const FEE_FRACTION_THRESHOLD: Decimal = Decimal::ONE_HUNDRED;

/// Local balance as a percentage of local + remote; 0 unless local > 0
pub fn balance_ratio(local: Sat, remote: Sat) -> f64 {
    if local > 0 {
        safe_percentage(local, local + remote)
    } else {
        0.0
    }
}

/// Lifetime routed volume as a percentage of capacity.
///
/// Gated on `local > 0` like [`balance_ratio`]; zero capacity yields 0.
pub fn capacity_efficiency(local: Sat, received: Sat, sent: Sat, capacity: Sat) -> f64 {
    if local > 0 {
        safe_percentage(received + sent, capacity)
    } else {
        0.0
    }
}

/// Render a fee given in satoshis.
///
/// Zero is `"0"`, amounts under 100 sat keep three fractional digits, larger
/// amounts are rounded half-to-even to a whole number.
///
/// # Examples
/// ```
/// use lnd_balance_report::analysis::metrics::format_fee;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_fee(Decimal::ZERO), "0");
/// assert_eq!(format_fee(Decimal::new(5, 1)), "0.500");
/// assert_eq!(format_fee(Decimal::from(150)), "150");
/// ```
pub fn format_fee(fee_sat: Decimal) -> String {
    if fee_sat.is_zero() {
        "0".to_string()
    } else if fee_sat < FEE_FRACTION_THRESHOLD {
        format!("{:.3}", fee_sat.round_dp(3))
    } else {
        fee_sat
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
            .trunc()
            .to_string()
    }
}

/// Render a fee given in millisatoshis
pub fn format_fee_msat(fee_msat: u64) -> String {
    format_fee(msat_to_sat_decimal(fee_msat))
}

/// Per-channel derived values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelMetrics {
    pub ratio: f64,
    pub efficiency: f64,
    pub day_fee: Decimal,
    pub week_fee: Decimal,
    pub month_fee: Decimal,
}

impl ChannelMetrics {
    pub fn compute(channel: &ChannelRecord, summary: &ChannelHtlcSummary) -> Self {
        Self {
            ratio: balance_ratio(channel.local_balance, channel.remote_balance),
            efficiency: capacity_efficiency(
                channel.local_balance,
                channel.total_received,
                channel.total_sent,
                channel.capacity,
            ),
            day_fee: msat_to_sat_decimal(summary.day.fee_msat),
            week_fee: msat_to_sat_decimal(summary.week.fee_msat),
            month_fee: msat_to_sat_decimal(summary.month.fee_msat),
        }
    }
}

/// Totals across channels for the balance summary
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TotalBalance {
    pub capacity: Sat,
    pub local_balance: Sat,
    pub remote_balance: Sat,
    pub amount_in: Sat,
    pub amount_out: Sat,
    pub commit_fee: Sat,
    pub ratio: f64,
    pub efficiency: f64,
}

impl TotalBalance {
    pub fn from_channels(channels: &[ChannelRecord]) -> Self {
        let mut total = Self::default();
        for channel in channels {
            total.add_channel(channel);
        }
        total.finalise();
        total
    }

    pub fn add_channel(&mut self, channel: &ChannelRecord) {
        self.capacity += channel.capacity;
        self.local_balance += channel.local_balance;
        self.remote_balance += channel.remote_balance;
        self.amount_in += channel.total_received;
        self.amount_out += channel.total_sent;
        self.commit_fee += channel.commit_fee;
    }

    /// Derive ratio and efficiency from the summed amounts
    pub fn finalise(&mut self) {
        self.ratio = balance_ratio(self.local_balance, self.remote_balance);
        self.efficiency = capacity_efficiency(
            self.local_balance,
            self.amount_in,
            self.amount_out,
            self.capacity,
        );
    }
}

/// Totals across channels for the channel listing
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TotalChannels {
    #[serde(flatten)]
    pub balance: TotalBalance,
    pub day_amount_in: Sat,
    pub day_amount_out: Sat,
    pub month_amount_in: Sat,
    pub month_amount_out: Sat,
    pub day_fee: Decimal,
    pub week_fee: Decimal,
    pub month_fee: Decimal,
}

impl TotalChannels {
    pub fn add_channel(
        &mut self,
        channel: &ChannelRecord,
        summary: &ChannelHtlcSummary,
        metrics: &ChannelMetrics,
    ) {
        self.balance.add_channel(channel);

        self.day_amount_in += summary.day.amount_in;
        self.day_amount_out += summary.day.amount_out;
        self.month_amount_in += summary.month.amount_in;
        self.month_amount_out += summary.month.amount_out;

        self.day_fee += metrics.day_fee;
        self.week_fee += metrics.week_fee;
        self.month_fee += metrics.month_fee;
    }

    pub fn finalise(&mut self) {
        self.balance.finalise();
    }
}
