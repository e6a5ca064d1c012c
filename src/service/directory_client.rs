//! 合约目录客户端
//!
//! 按网络 ID 查询注册合约地址、ABI 与候选 RPC。任何失败（非 2xx、
//! 传输错误、JSON 不合法、缺字段）都按"未找到"处理，不重试。

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;

use crate::{
    config::DirectoryConfig,
    domain::{DirectoryPayload, NetworkId, RegistryDescriptor},
    error::ResolveError,
};

#[async_trait]
pub trait RegistryDirectory: Send + Sync {
    async fn fetch_descriptor(
        &self,
        network_id: &NetworkId,
    ) -> Result<RegistryDescriptor, ResolveError>;
}

pub struct HttpRegistryDirectory {
    host: String,
    http_client: reqwest::Client,
}

impl HttpRegistryDirectory {
    pub fn new(host: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build registry directory HTTP client")?;
        Ok(Self::with_client(host, client))
    }

    pub fn with_client(host: impl Into<String>, http_client: reqwest::Client) -> Self {
        Self {
            host: host.into().trim_end_matches('/').to_string(),
            http_client,
        }
    }

    pub fn from_config(config: &DirectoryConfig) -> anyhow::Result<Self> {
        Self::new(config.host.clone(), config.request_timeout())
    }

    pub fn descriptor_url(&self, network_id: &NetworkId) -> String {
        format!("{}/chains/{}/contracts/domains", self.host, network_id)
    }

    async fn fetch_payload(&self, url: &str) -> Result<DirectoryPayload, ResolveError> {
        let resp = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| ResolveError::directory(format!("request failed: {}", e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ResolveError::directory(format!("http {}", status.as_u16())));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| ResolveError::directory(format!("failed to read body: {}", e)))?;
        tracing::debug!(url = %url, body = %body, "Fetched registry directory entry");

        serde_json::from_str::<DirectoryPayload>(&body)
            .map_err(|e| ResolveError::directory(format!("malformed payload: {}", e)))
    }
}

#[async_trait]
impl RegistryDirectory for HttpRegistryDirectory {
    async fn fetch_descriptor(
        &self,
        network_id: &NetworkId,
    ) -> Result<RegistryDescriptor, ResolveError> {
        let url = self.descriptor_url(network_id);

        let result = match self.fetch_payload(&url).await {
            Ok(payload) => RegistryDescriptor::try_from(payload),
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            tracing::warn!(
                network_id = %network_id,
                url = %url,
                error = %e,
                "Registry directory lookup failed"
            );
        }
        result
    }
}
