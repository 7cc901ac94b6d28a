//! Common Test Utilities
//!
//! Fixture builders and an in-memory node shared across the integration tests.

use std::sync::Mutex;

use lnd_balance_report::errors::{RpcError, RpcResult};
use lnd_balance_report::rpc::{ChannelFilter, ForwardingHistoryRequest, NodeClient, NodeInfo};
use lnd_balance_report::types::{ChannelRecord, ForwardingEvent, Sat, ShortChannelId};

/// Fixed reference instant used by every scenario (2023-11-14T22:13:20Z)
pub const NOW: i64 = 1_700_000_000;

pub fn scid(block_height: u32, tx_index: u32, output_index: u16) -> u64 {
    ShortChannelId::new(block_height, tx_index, output_index).encode()
}

pub fn channel(channel_id: u64, capacity: Sat, local: Sat, remote: Sat) -> ChannelRecord {
    let mut remote_pubkey = vec![0x02, 0xde, 0xad, 0xbe, 0xef];
    remote_pubkey.resize(33, 0x11);
    ChannelRecord {
        channel_id,
        capacity,
        local_balance: local,
        remote_balance: remote,
        total_received: 0,
        total_sent: 0,
        commit_fee: 0,
        active: true,
        remote_pubkey,
    }
}

pub fn forward(
    timestamp: i64,
    channel_in: u64,
    channel_out: u64,
    amount: Sat,
    fee_msat: u64,
) -> ForwardingEvent {
    ForwardingEvent {
        timestamp,
        channel_in,
        channel_out,
        amount_in: amount,
        amount_out: amount,
        fee_msat,
    }
}

/// In-memory node that records the requests it receives
#[derive(Default)]
pub struct MockNode {
    pub channels: Vec<ChannelRecord>,
    pub events: Vec<ForwardingEvent>,
    pub fail_with: Option<String>,
    pub history_requests: Mutex<Vec<ForwardingHistoryRequest>>,
    pub channel_filters: Mutex<Vec<ChannelFilter>>,
}

impl MockNode {
    pub fn new(channels: Vec<ChannelRecord>, events: Vec<ForwardingEvent>) -> Self {
        Self {
            channels,
            events,
            ..Default::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Default::default()
        }
    }

    fn check(&self, method: &str) -> RpcResult<()> {
        match &self.fail_with {
            Some(message) => Err(RpcError::CallFailed {
                method: method.to_string(),
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl NodeClient for MockNode {
    async fn get_info(&self) -> RpcResult<NodeInfo> {
        self.check("GetInfo")?;
        Ok(NodeInfo {
            version: "0.17.4-beta".to_string(),
            block_height: 820_000,
            identity_pubkey: "02deadbeef".to_string(),
            alias: "mock".to_string(),
            network: "regtest".to_string(),
            uris: vec![],
            synced_to_chain: true,
            synced_to_graph: true,
            best_header_timestamp: NOW,
            active_channels: self.channels.len() as u32,
            inactive_channels: 0,
            pending_channels: 0,
        })
    }

    async fn list_channels(&self, filter: &ChannelFilter) -> RpcResult<Vec<ChannelRecord>> {
        self.check("ListChannels")?;
        self.channel_filters.lock().unwrap().push(filter.clone());
        Ok(self.channels.clone())
    }

    async fn forwarding_history(
        &self,
        request: &ForwardingHistoryRequest,
    ) -> RpcResult<Vec<ForwardingEvent>> {
        self.check("ForwardingHistory")?;
        self.history_requests.lock().unwrap().push(*request);
        Ok(self.events.clone())
    }
}
