//! Channel snapshot as reported by the node

use serde::{Deserialize, Serialize};

/// Amounts in satoshis
pub type Sat = i64;

/// Immutable snapshot of one open channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRecord {
    pub channel_id: u64,
    pub capacity: Sat,
    pub local_balance: Sat,
    pub remote_balance: Sat,
    /// Lifetime amount received over the channel
    pub total_received: Sat,
    /// Lifetime amount sent over the channel
    pub total_sent: Sat,
    pub commit_fee: Sat,
    pub active: bool,
    /// Counterparty node public key (33 bytes, compressed)
    pub remote_pubkey: Vec<u8>,
}

impl ChannelRecord {
    /// First four bytes of the counterparty key, hex encoded
    pub fn pubkey_prefix(&self) -> String {
        let end = self.remote_pubkey.len().min(4);
        hex::encode(&self.remote_pubkey[..end])
    }
}
