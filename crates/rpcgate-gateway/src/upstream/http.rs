//! HTTP upstream: relays the request body to the backing node via POST.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use rpcgate_core::error::{Result, RpcGateError};

use crate::config::UpstreamSection;

use super::registry::{JsonRpcUpstream, UpstreamReply};

pub struct HttpUpstream {
    route: &'static str,
    url: String,
    client: reqwest::Client,
}

impl HttpUpstream {
    pub fn new(route: &'static str, cfg: &UpstreamSection) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(cfg.request_timeout_ms))
            .connect_timeout(Duration::from_millis(cfg.connect_timeout_ms))
            .build()
            .map_err(|e| RpcGateError::Internal(format!("upstream client build failed: {e}")))?;

        Ok(Self {
            route,
            url: cfg.url.clone(),
            client,
        })
    }
}

#[async_trait]
impl JsonRpcUpstream for HttpUpstream {
    fn route(&self) -> &'static str {
        self.route
    }

    async fn forward(&self, body: Bytes) -> Result<UpstreamReply> {
        let resp = self
            .client
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| RpcGateError::Upstream(format!("send failed: {e}")))?;

        let status = resp.status().as_u16();
        let body = resp
            .bytes()
            .await
            .map_err(|e| RpcGateError::Upstream(format!("read body failed: {e}")))?;

        Ok(UpstreamReply { status, body })
    }
}
