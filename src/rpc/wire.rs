//! JSON wire types for the lnd REST gateway
//!
//! lnd encodes 64-bit integers as JSON strings and omits fields holding their
//! zero value, so every numeric field accepts a string or a number and
//! defaults when missing.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use crate::errors::{RpcError, RpcResult};
use crate::types::{ChannelRecord, ForwardingEvent, Sat, MSAT_PER_SAT};
use crate::utils::currency::msat_to_sat;

/// Accept `"123"` as well as `123`
fn from_str_or_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Deserialize<'de>,
    T::Err: Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Str(String),
        Num(T),
    }

    match Raw::<T>::deserialize(deserializer)? {
        Raw::Str(s) => s.parse().map_err(de::Error::custom),
        Raw::Num(n) => Ok(n),
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelDto {
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub remote_pubkey: String,
    #[serde(default, deserialize_with = "from_str_or_number")]
    pub chan_id: u64,
    #[serde(default, deserialize_with = "from_str_or_number")]
    pub capacity: i64,
    #[serde(default, deserialize_with = "from_str_or_number")]
    pub local_balance: i64,
    #[serde(default, deserialize_with = "from_str_or_number")]
    pub remote_balance: i64,
    #[serde(default, deserialize_with = "from_str_or_number")]
    pub commit_fee: i64,
    #[serde(default, deserialize_with = "from_str_or_number")]
    pub total_satoshis_sent: i64,
    #[serde(default, deserialize_with = "from_str_or_number")]
    pub total_satoshis_received: i64,
}

impl ChannelDto {
    pub fn into_record(self) -> RpcResult<ChannelRecord> {
        let remote_pubkey = hex::decode(&self.remote_pubkey).map_err(|e| {
            RpcError::DeserialisationFailed(format!(
                "channel {} has invalid remote_pubkey {:?}: {}",
                self.chan_id, self.remote_pubkey, e
            ))
        })?;

        Ok(ChannelRecord {
            channel_id: self.chan_id,
            capacity: self.capacity,
            local_balance: self.local_balance,
            remote_balance: self.remote_balance,
            total_received: self.total_satoshis_received,
            total_sent: self.total_satoshis_sent,
            commit_fee: self.commit_fee,
            active: self.active,
            remote_pubkey,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListChannelsResponse {
    #[serde(default)]
    pub channels: Vec<ChannelDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForwardingEventDto {
    #[serde(default, deserialize_with = "from_str_or_number")]
    pub timestamp: u64,
    #[serde(default, deserialize_with = "from_str_or_number")]
    pub chan_id_in: u64,
    #[serde(default, deserialize_with = "from_str_or_number")]
    pub chan_id_out: u64,
    #[serde(default, deserialize_with = "from_str_or_number")]
    pub amt_in: u64,
    #[serde(default, deserialize_with = "from_str_or_number")]
    pub amt_out: u64,
    #[serde(default, deserialize_with = "from_str_or_number")]
    pub fee: u64,
    #[serde(default, deserialize_with = "from_str_or_number")]
    pub fee_msat: u64,
    #[serde(default, deserialize_with = "from_str_or_number")]
    pub amt_in_msat: u64,
    #[serde(default, deserialize_with = "from_str_or_number")]
    pub amt_out_msat: u64,
}

impl From<ForwardingEventDto> for ForwardingEvent {
    fn from(dto: ForwardingEventDto) -> Self {
        // Older nodes only fill the satoshi fields
        let amount_in = if dto.amt_in_msat > 0 {
            msat_to_sat(dto.amt_in_msat)
        } else {
            dto.amt_in as Sat
        };
        let amount_out = if dto.amt_out_msat > 0 {
            msat_to_sat(dto.amt_out_msat)
        } else {
            dto.amt_out as Sat
        };
        let fee_msat = if dto.fee_msat > 0 {
            dto.fee_msat
        } else {
            dto.fee * MSAT_PER_SAT
        };

        ForwardingEvent {
            timestamp: dto.timestamp as i64,
            channel_in: dto.chan_id_in,
            channel_out: dto.chan_id_out,
            amount_in,
            amount_out,
            fee_msat,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForwardingHistoryResponse {
    #[serde(default)]
    pub forwarding_events: Vec<ForwardingEventDto>,
    #[serde(default)]
    pub last_offset_index: u32,
}

/// Body of `POST /v1/switch`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForwardingHistoryBody {
    pub start_time: String,
    pub end_time: String,
    pub index_offset: u32,
    pub num_max_events: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChainDto {
    #[serde(default)]
    pub chain: String,
    #[serde(default)]
    pub network: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetInfoResponse {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub identity_pubkey: String,
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub num_pending_channels: u32,
    #[serde(default)]
    pub num_active_channels: u32,
    #[serde(default)]
    pub num_inactive_channels: u32,
    #[serde(default)]
    pub block_height: u32,
    #[serde(default)]
    pub synced_to_chain: bool,
    #[serde(default)]
    pub synced_to_graph: bool,
    #[serde(default, deserialize_with = "from_str_or_number")]
    pub best_header_timestamp: i64,
    #[serde(default)]
    pub uris: Vec<String>,
    #[serde(default)]
    pub chains: Vec<ChainDto>,
}

/// Node status as printed by `get status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeInfo {
    pub version: String,
    pub block_height: u32,
    pub identity_pubkey: String,
    pub alias: String,
    pub network: String,
    pub uris: Vec<String>,
    pub synced_to_chain: bool,
    pub synced_to_graph: bool,
    pub best_header_timestamp: i64,
    #[serde(rename = "num_active_channels")]
    pub active_channels: u32,
    #[serde(rename = "num_inactive_channels")]
    pub inactive_channels: u32,
    #[serde(rename = "num_pending_channels")]
    pub pending_channels: u32,
}

impl From<GetInfoResponse> for NodeInfo {
    fn from(info: GetInfoResponse) -> Self {
        let network = info
            .chains
            .first()
            .map(|c| c.network.clone())
            .unwrap_or_default();

        NodeInfo {
            version: info.version,
            block_height: info.block_height,
            identity_pubkey: info.identity_pubkey,
            alias: info.alias,
            network,
            uris: info.uris,
            synced_to_chain: info.synced_to_chain,
            synced_to_graph: info.synced_to_graph,
            best_header_timestamp: info.best_header_timestamp,
            active_channels: info.num_active_channels,
            inactive_channels: info.num_inactive_channels,
            pending_channels: info.num_pending_channels,
        }
    }
}
