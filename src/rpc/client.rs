use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use reqwest::{Certificate, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

use super::wire::{
    ForwardingHistoryBody, ForwardingHistoryResponse, GetInfoResponse, ListChannelsResponse,
    NodeInfo,
};
use super::NodeClient;
use crate::config::LndConfig;
use crate::errors::{RpcError, RpcResult};
use crate::types::{ChannelRecord, ForwardingEvent};

const MACAROON_HEADER: &str = "Grpc-Metadata-macaroon";

/// Channel selection for `ListChannels`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelFilter {
    pub active_only: bool,
    pub inactive_only: bool,
    pub public_only: bool,
    pub private_only: bool,
    /// Only channels with this peer (33-byte compressed key)
    pub peer: Option<Vec<u8>>,
}

impl ChannelFilter {
    /// Query string pairs understood by the REST gateway
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        for (name, set) in [
            ("active_only", self.active_only),
            ("inactive_only", self.inactive_only),
            ("public_only", self.public_only),
            ("private_only", self.private_only),
        ] {
            if set {
                query.push((name, "true".to_string()));
            }
        }
        if let Some(peer) = &self.peer {
            query.push(("peer", URL_SAFE.encode(peer)));
        }
        query
    }
}

/// Parameters for `ForwardingHistory`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForwardingHistoryRequest {
    /// Unix seconds, inclusive
    pub start_time: i64,
    /// Unix seconds, exclusive; 0 lets the node use the current time
    pub end_time: i64,
    pub index_offset: u32,
    pub max_events: u32,
}

impl ForwardingHistoryRequest {
    fn body(&self) -> ForwardingHistoryBody {
        ForwardingHistoryBody {
            start_time: self.start_time.max(0).to_string(),
            end_time: self.end_time.max(0).to_string(),
            index_offset: self.index_offset,
            num_max_events: self.max_events,
        }
    }
}

/// Client for the lnd REST gateway
pub struct LndClient {
    http: reqwest::Client,
    base_url: String,
    macaroon_hex: Option<String>,
}

impl LndClient {
    /// Build a client from configuration, loading the TLS cert and macaroon
    pub fn new(config: &LndConfig) -> RpcResult<Self> {
        let base_url = config.base_url();
        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_seconds));

        if base_url.starts_with("https://") {
            let cert_path = config.tls_cert_path();
            let pem = std::fs::read(&cert_path).map_err(|e| {
                RpcError::Credentials(format!("reading {}: {}", cert_path.display(), e))
            })?;
            let cert = Certificate::from_pem(&pem).map_err(|e| {
                RpcError::Credentials(format!("parsing {}: {}", cert_path.display(), e))
            })?;
            builder = builder.add_root_certificate(cert);
        }

        let macaroon_hex = if config.no_macaroons {
            None
        } else {
            let macaroon_path = config.macaroon_path();
            let macaroon = std::fs::read(&macaroon_path).map_err(|e| {
                RpcError::Credentials(format!("reading {}: {}", macaroon_path.display(), e))
            })?;
            Some(hex::encode(macaroon))
        };

        let http = builder
            .build()
            .map_err(|e| RpcError::ConnectionFailed(e.to_string()))?;

        info!("Using lnd REST endpoint {}", base_url);

        Ok(Self {
            http,
            base_url,
            macaroon_hex,
        })
    }

    async fn send<T: DeserializeOwned>(&self, method: &str, request: RequestBuilder) -> RpcResult<T> {
        let request = match &self.macaroon_hex {
            Some(macaroon) => request.header(MACAROON_HEADER, macaroon),
            None => request,
        };

        let response = request.send().await.map_err(|e| RpcError::CallFailed {
            method: method.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RpcError::Status {
                method: method.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| RpcError::DeserialisationFailed(format!("{}: {}", method, e)))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl NodeClient for LndClient {
    async fn get_info(&self) -> RpcResult<NodeInfo> {
        let request = self.http.get(self.url("/v1/getinfo"));
        let info: GetInfoResponse = self.send("GetInfo", request).await?;
        Ok(info.into())
    }

    async fn list_channels(&self, filter: &ChannelFilter) -> RpcResult<Vec<ChannelRecord>> {
        let request = self.http.get(self.url("/v1/channels")).query(&filter.query());
        let response: ListChannelsResponse = self.send("ListChannels", request).await?;

        debug!("ListChannels returned {} channels", response.channels.len());
        response
            .channels
            .into_iter()
            .map(|c| c.into_record())
            .collect()
    }

    async fn forwarding_history(
        &self,
        request: &ForwardingHistoryRequest,
    ) -> RpcResult<Vec<ForwardingEvent>> {
        let http_request = self.http.post(self.url("/v1/switch")).json(&request.body());
        let response: ForwardingHistoryResponse =
            self.send("ForwardingHistory", http_request).await?;

        debug!(
            "ForwardingHistory returned {} events (last offset {})",
            response.forwarding_events.len(),
            response.last_offset_index
        );
        Ok(response
            .forwarding_events
            .into_iter()
            .map(ForwardingEvent::from)
            .collect())
    }
}
