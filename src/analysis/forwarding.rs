//! Forwarding aggregation
//!
//! Single pass over the forwarding history, accumulating per-channel
//! inbound/outbound volume and fees into day, week and month buckets.
//!
//! Each leg of an event is attributed independently: the inbound channel
//! sees the inbound amount, the outbound channel sees the outbound amount, and
//! both see the full fee. Per-channel fee sums therefore count every forward
//! twice and do not add up to the fee column of the raw event listing.

use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use super::window::{Window, WindowClassifier, WindowSet};
use crate::types::{ForwardingEvent, Sat};

/// Volume and fee accumulated within one window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WindowTotals {
    pub amount_in: Sat,
    pub amount_out: Sat,
    pub fee_msat: u64,
}

/// Forwarding totals for one channel across all windows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChannelHtlcSummary {
    pub day: WindowTotals,
    pub week: WindowTotals,
    pub month: WindowTotals,
}

impl ChannelHtlcSummary {
    pub fn window(&self, window: Window) -> &WindowTotals {
        match window {
            Window::Day => &self.day,
            Window::Week => &self.week,
            Window::Month => &self.month,
        }
    }

    fn window_mut(&mut self, window: Window) -> &mut WindowTotals {
        match window {
            Window::Day => &mut self.day,
            Window::Week => &mut self.week,
            Window::Month => &mut self.month,
        }
    }
}

/// Forwarding totals keyed by channel id. Channel id 0 never appears.
pub type SumHtlc = HashMap<u64, ChannelHtlcSummary>;

/// Which side of a forward a channel sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leg {
    Inbound,
    Outbound,
}

/// Accumulates forwarding events against a fixed reference instant
#[derive(Debug)]
pub struct ForwardingAggregator {
    classifier: WindowClassifier,
    sums: SumHtlc,
    events_seen: usize,
}

impl ForwardingAggregator {
    pub fn new(now: i64) -> Self {
        Self {
            classifier: WindowClassifier::new(now),
            sums: SumHtlc::new(),
            events_seen: 0,
        }
    }

    pub fn add(&mut self, event: &ForwardingEvent) {
        self.events_seen += 1;

        let windows = self.classifier.classify(event.timestamp);
        if windows.is_empty() {
            return;
        }

        self.credit(
            event.channel_in,
            Leg::Inbound,
            event.amount_in,
            event.fee_msat,
            windows,
        );
        self.credit(
            event.channel_out,
            Leg::Outbound,
            event.amount_out,
            event.fee_msat,
            windows,
        );
    }

    fn credit(&mut self, channel_id: u64, leg: Leg, amount: Sat, fee_msat: u64, windows: WindowSet) {
        if channel_id == 0 {
            return;
        }

        let summary = self.sums.entry(channel_id).or_default();
        for window in windows.iter() {
            let totals = summary.window_mut(window);
            match leg {
                Leg::Inbound => totals.amount_in += amount,
                Leg::Outbound => totals.amount_out += amount,
            }
            totals.fee_msat += fee_msat;
        }
    }

    pub fn finish(self) -> SumHtlc {
        debug!(
            "Aggregated {} forwarding events into {} channels",
            self.events_seen,
            self.sums.len()
        );
        self.sums
    }
}

/// Aggregate a forwarding history into per-channel window totals
pub fn aggregate(events: &[ForwardingEvent], now: i64) -> SumHtlc {
    let mut aggregator = ForwardingAggregator::new(now);
    for event in events {
        aggregator.add(event);
    }
    aggregator.finish()
}
