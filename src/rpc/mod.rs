//! lnd RPC integration module
//!
//! This module provides the node-facing side of the tool:
//! - **Client** - REST client for lnd with TLS certificate and macaroon auth
//! - **Wire** - JSON request/response types and their conversion into the
//!   core data model
//!
//! Report code only depends on the [`NodeClient`] trait, so any source of
//! channels and forwarding events can drive it.

pub mod client;
pub mod wire;

use crate::errors::RpcResult;
use crate::types::{ChannelRecord, ForwardingEvent};

// Re-export main types
pub use client::{ChannelFilter, ForwardingHistoryRequest, LndClient};
pub use wire::NodeInfo;

/// Calls the reports need from a node
#[allow(async_fn_in_trait)]
pub trait NodeClient {
    async fn get_info(&self) -> RpcResult<NodeInfo>;

    async fn list_channels(&self, filter: &ChannelFilter) -> RpcResult<Vec<ChannelRecord>>;

    async fn forwarding_history(
        &self,
        request: &ForwardingHistoryRequest,
    ) -> RpcResult<Vec<ForwardingEvent>>;
}
