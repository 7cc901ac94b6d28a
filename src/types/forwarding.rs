//! Forwarding events ("contracts") routed through the node

use serde::{Deserialize, Serialize};

use super::channel::Sat;

/// Fee sub-units (millisatoshis) per settled-amount unit (satoshi)
pub const MSAT_PER_SAT: u64 = 1000;

/// A single settled forward. A channel id of 0 means that leg is unattributed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardingEvent {
    /// Seconds since the unix epoch
    pub timestamp: i64,
    pub channel_in: u64,
    pub channel_out: u64,
    pub amount_in: Sat,
    pub amount_out: Sat,
    pub fee_msat: u64,
}
