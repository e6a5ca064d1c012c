//! 注册合约网关
//!
//! 通过描述中选定的 RPC 建立只读连接（不带签名者），暴露解析所需的两个 view 调用。

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use async_trait::async_trait;
use ethers::{
    contract::Contract,
    providers::{Http, Provider},
    types::Address,
};

use crate::{
    config::RpcConfig,
    domain::{RegistryDescriptor, RegistryMethodVariant},
    error::ResolveError,
    infrastructure::registry_abi::TOP_LEVEL_DOMAIN_METHOD,
};

/// 单个 name→address 入口的调用结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Resolved(Address),
    /// 调用成功但返回零地址（名称未注册）
    Empty,
    /// ABI 中没有该函数，或参数与 ABI 不匹配
    NotSupported(String),
    Reverted(String),
    /// 传输层或解码错误
    Failed(String),
}

impl LookupOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            LookupOutcome::Resolved(_) => "resolved",
            LookupOutcome::Empty => "empty",
            LookupOutcome::NotSupported(_) => "not_supported",
            LookupOutcome::Reverted(_) => "reverted",
            LookupOutcome::Failed(_) => "failed",
        }
    }
}

#[async_trait]
pub trait RegistryContract: Send + Sync {
    async fn top_level_domain(&self) -> Result<String, ResolveError>;

    async fn lookup_address(&self, variant: RegistryMethodVariant, argument: &str)
        -> LookupOutcome;
}

pub trait RegistryConnector: Send + Sync {
    fn connect(
        &self,
        descriptor: &RegistryDescriptor,
    ) -> Result<Box<dyn RegistryContract>, ResolveError>;
}

/// 基于 ethers `Provider<Http>` 的连接器
pub struct EthersRegistryConnector {
    http_client: reqwest::Client,
}

impl EthersRegistryConnector {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build registry RPC HTTP client")?;
        Ok(Self {
            http_client: client,
        })
    }

    pub fn from_config(config: &RpcConfig) -> anyhow::Result<Self> {
        Self::new(config.request_timeout())
    }
}

impl RegistryConnector for EthersRegistryConnector {
    fn connect(
        &self,
        descriptor: &RegistryDescriptor,
    ) -> Result<Box<dyn RegistryContract>, ResolveError> {
        let rpc = descriptor.select_rpc()?;
        let url = reqwest::Url::parse(rpc).map_err(|e| {
            tracing::warn!(rpc = %rpc, error = %e, "Registry RPC endpoint is not a valid URL");
            ResolveError::NoUsableEndpoint
        })?;

        let provider = Provider::new(Http::new_with_client(url, self.http_client.clone()));
        let contract = Contract::new(
            descriptor.contract_address,
            descriptor.abi.clone(),
            Arc::new(provider),
        );

        tracing::debug!(
            rpc = %rpc,
            contract = ?descriptor.contract_address,
            "Connected to registry contract"
        );

        Ok(Box::new(EthersRegistryContract { contract }))
    }
}

pub struct EthersRegistryContract {
    contract: Contract<Provider<Http>>,
}

#[async_trait]
impl RegistryContract for EthersRegistryContract {
    async fn top_level_domain(&self) -> Result<String, ResolveError> {
        let call = self
            .contract
            .method::<_, String>(TOP_LEVEL_DOMAIN_METHOD, ())
            .map_err(|e| ResolveError::contract_call(TOP_LEVEL_DOMAIN_METHOD, e))?;

        call.call()
            .await
            .map_err(|e| ResolveError::contract_call(TOP_LEVEL_DOMAIN_METHOD, e))
    }

    async fn lookup_address(
        &self,
        variant: RegistryMethodVariant,
        argument: &str,
    ) -> LookupOutcome {
        let call = match self
            .contract
            .method::<_, Address>(variant.method_name(), argument.to_string())
        {
            Ok(call) => call,
            Err(e) => return LookupOutcome::NotSupported(e.to_string()),
        };

        match call.call().await {
            Ok(address) if address.is_zero() => LookupOutcome::Empty,
            Ok(address) => LookupOutcome::Resolved(address),
            Err(e) if e.is_revert() => LookupOutcome::Reverted(e.to_string()),
            Err(e) => LookupOutcome::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::registry_abi::default_registry_abi;

    fn descriptor(rpcs: Vec<&str>, preferred: Option<&str>) -> RegistryDescriptor {
        RegistryDescriptor {
            contract_address: Address::repeat_byte(0xab),
            abi: default_registry_abi(),
            rpc_endpoints: rpcs.into_iter().map(String::from).collect(),
            preferred_rpc: preferred.map(String::from),
        }
    }

    #[test]
    fn test_connector_from_config() {
        let connector = EthersRegistryConnector::from_config(&RpcConfig {
            request_timeout_secs: 3,
        });
        assert!(connector.is_ok());
    }

    #[test]
    fn test_connect_without_endpoint_fails() {
        let connector = EthersRegistryConnector::new(Duration::from_secs(1)).unwrap();
        let err = connector.connect(&descriptor(vec![], None)).err().unwrap();
        assert_eq!(err, ResolveError::NoUsableEndpoint);
    }

    #[test]
    fn test_connect_with_malformed_url_fails() {
        let connector = EthersRegistryConnector::new(Duration::from_secs(1)).unwrap();
        let err = connector
            .connect(&descriptor(vec!["not a url"], None))
            .err()
            .unwrap();
        assert_eq!(err, ResolveError::NoUsableEndpoint);
    }

    #[tokio::test]
    async fn test_method_missing_from_abi_is_not_supported() {
        let connector = EthersRegistryConnector::new(Duration::from_secs(1)).unwrap();
        let mut desc = descriptor(vec!["http://127.0.0.1:9"], None);
        desc.abi = serde_json::from_value(serde_json::json!([{
            "name": "TOP_LEVEL_DOMAIN",
            "type": "function",
            "inputs": [],
            "outputs": [{ "name": "", "type": "string" }],
            "stateMutability": "view"
        }]))
        .unwrap();

        let contract = connector.connect(&desc).unwrap();
        let outcome = contract
            .lookup_address(RegistryMethodVariant::NameToAddress, "alice")
            .await;
        assert_eq!(outcome.label(), "not_supported");
    }
}
