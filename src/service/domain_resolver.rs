//! 域名解析编排
//!
//! ParseNetwork → ExtractBase → FetchDirectory → Connect → QueryTLD →
//! ComposeFullName → ResolveAddress。每一步失败都直接终止，对外只暴露
//! "解析成功"或"无结果"。

use std::{sync::Arc, time::Duration};

use anyhow::Result;

use crate::{
    config::Config,
    domain::{base_domain, compose_full_name, NetworkId, RegistryMethodVariant, ResolutionResult},
    error::ResolveError,
    service::{
        contract_gateway::{EthersRegistryConnector, LookupOutcome, RegistryConnector, RegistryContract},
        directory_client::{HttpRegistryDirectory, RegistryDirectory},
    },
};

pub struct DomainResolver {
    directory: Arc<dyn RegistryDirectory>,
    connector: Arc<dyn RegistryConnector>,
    resolve_timeout: Duration,
}

impl DomainResolver {
    pub fn new(
        directory: Arc<dyn RegistryDirectory>,
        connector: Arc<dyn RegistryConnector>,
        resolve_timeout: Duration,
    ) -> Self {
        Self {
            directory,
            connector,
            resolve_timeout,
        }
    }

    /// 用 HTTP 目录客户端和 ethers 网关组装
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(
            Arc::new(HttpRegistryDirectory::from_config(&config.directory)?),
            Arc::new(EthersRegistryConnector::from_config(&config.rpc)?),
            config.resolver.resolve_timeout(),
        ))
    }

    /// 对外入口：任何失败都折叠为 `None`
    pub async fn resolve(&self, network_id: &str, domain: &str) -> Option<ResolutionResult> {
        match self.try_resolve(network_id, domain).await {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::warn!(
                    network_id = %network_id,
                    domain = %domain,
                    code = e.code(),
                    error = %e,
                    "Domain resolution failed"
                );
                None
            }
        }
    }

    /// 与 [`resolve`](Self::resolve) 相同，但保留失败原因
    pub async fn try_resolve(
        &self,
        network_id: &str,
        domain: &str,
    ) -> Result<ResolutionResult, ResolveError> {
        // 参数校验在任何网络调用之前完成
        if domain.is_empty() {
            return Err(ResolveError::EmptyDomain);
        }
        let network_id = NetworkId::parse(network_id)?;
        let base = base_domain(domain);
        if base.is_empty() {
            return Err(ResolveError::EmptyDomain);
        }

        match tokio::time::timeout(self.resolve_timeout, self.resolve_on_chain(&network_id, base))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(ResolveError::Timeout(self.resolve_timeout.as_millis() as u64)),
        }
    }

    async fn resolve_on_chain(
        &self,
        network_id: &NetworkId,
        base: &str,
    ) -> Result<ResolutionResult, ResolveError> {
        let descriptor = self.directory.fetch_descriptor(network_id).await?;
        let contract = self.connector.connect(&descriptor)?;

        let top_level_domain = contract.top_level_domain().await?;
        let full_name = compose_full_name(base, &top_level_domain);

        let resolved_address = resolve_address(contract.as_ref(), base, &full_name)
            .await
            .ok_or_else(|| ResolveError::NoAddressResolved(full_name.clone()))?;

        tracing::info!(
            network_id = %network_id,
            domain = %full_name,
            address = ?resolved_address,
            "Domain resolved"
        );

        Ok(ResolutionResult {
            resolved_address,
            domain_name: full_name,
        })
    }
}

/// 按优先级逐个尝试 name→address 入口，取第一个返回非零地址的
async fn resolve_address(
    contract: &dyn RegistryContract,
    base: &str,
    full_name: &str,
) -> Option<ethers::types::Address> {
    for variant in RegistryMethodVariant::PRIORITY {
        let argument = variant.select_argument(base, full_name);
        let outcome = contract.lookup_address(variant, argument).await;
        match &outcome {
            LookupOutcome::Resolved(address) => return Some(*address),
            LookupOutcome::Empty => {
                tracing::debug!(
                    signature = variant.signature(),
                    argument = %argument,
                    "Registry returned zero address"
                );
            }
            LookupOutcome::NotSupported(reason)
            | LookupOutcome::Reverted(reason)
            | LookupOutcome::Failed(reason) => {
                tracing::debug!(
                    signature = variant.signature(),
                    argument = %argument,
                    outcome = outcome.label(),
                    reason = %reason,
                    "Registry lookup variant unavailable, trying next"
                );
            }
        }
    }
    None
}
