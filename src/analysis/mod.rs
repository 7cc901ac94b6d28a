//! Forwarding aggregation and derived-metrics engine
//!
//! The engine runs as a two-phase pipeline over data already fetched from the
//! node:
//!
//! - **Window** - trailing day/week/month classification against a fixed `now`
//! - **Forwarding** - per-channel accumulation of volume and fees per window
//! - **Metrics** - balance ratio, capacity efficiency and fee display values
//! - **Reports** - sorting and fixed-width rendering of the three views
//!
//! ## Usage
//!
//! ```rust
//! use lnd_balance_report::analysis::{aggregate, build_channel_report, OutputFormat, ReportFormatter};
//! use lnd_balance_report::errors::AppResult;
//! use lnd_balance_report::types::{ChannelRecord, ForwardingEvent};
//!
//! fn example(channels: &[ChannelRecord], events: &[ForwardingEvent], now: i64) -> AppResult<String> {
//!     let sums = aggregate(events, now);
//!     let report = build_channel_report(channels, &sums);
//!     ReportFormatter::format_channels(&report, &OutputFormat::Console)
//! }
//! ```

pub mod forwarding;
pub mod metrics;
pub mod reports;
pub mod window;

// Re-export main types and interfaces
pub use forwarding::{aggregate, ChannelHtlcSummary, ForwardingAggregator, SumHtlc, WindowTotals};
pub use metrics::{
    balance_ratio, capacity_efficiency, format_fee, ChannelMetrics, TotalBalance, TotalChannels,
};
pub use reports::{
    build_balance_report, build_channel_report, build_contract_report, BalanceReport,
    ChannelReport, ContractReport, OutputFormat, ReportFormatter,
};
pub use window::{classify, Window, WindowClassifier, WindowSet};
