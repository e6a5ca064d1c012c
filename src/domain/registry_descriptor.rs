//! 注册合约描述
//!
//! 目录服务 `GET {host}/chains/{id}/contracts/domains` 返回的负载，
//! 以及从中整理出的 RegistryDescriptor。

use ethers::{abi::Abi, types::Address};
use serde::Deserialize;

use crate::{error::ResolveError, infrastructure::registry_abi};

/// 目录服务原始响应
///
/// 两种部署形态：
/// - `{ address, blockchain: { rpcs, custom_rpc? } }`
/// - `{ address, abi, blockchain: { rpcs } }`（ABI 内联）
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryPayload {
    pub address: String,
    #[serde(default)]
    pub abi: Option<serde_json::Value>,
    pub blockchain: BlockchainPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlockchainPayload {
    #[serde(default)]
    pub rpcs: Option<Vec<String>>,
    #[serde(default)]
    pub custom_rpc: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RegistryDescriptor {
    pub contract_address: Address,
    pub abi: Abi,
    pub rpc_endpoints: Vec<String>,
    pub preferred_rpc: Option<String>,
}

impl RegistryDescriptor {
    /// 优先 `custom_rpc`，其次 `rpcs` 的第一项
    pub fn select_rpc(&self) -> Result<&str, ResolveError> {
        if let Some(preferred) = self.preferred_rpc.as_deref() {
            if !preferred.trim().is_empty() {
                return Ok(preferred);
            }
        }
        match self.rpc_endpoints.first() {
            Some(url) if !url.trim().is_empty() => Ok(url.as_str()),
            _ => Err(ResolveError::NoUsableEndpoint),
        }
    }
}

impl TryFrom<DirectoryPayload> for RegistryDescriptor {
    type Error = ResolveError;

    fn try_from(payload: DirectoryPayload) -> Result<Self, Self::Error> {
        let contract_address = payload
            .address
            .trim()
            .parse::<Address>()
            .map_err(|e| {
                ResolveError::directory(format!(
                    "invalid contract address {:?}: {}",
                    payload.address, e
                ))
            })?;

        let BlockchainPayload { rpcs, custom_rpc } = payload.blockchain;
        if rpcs.is_none() && custom_rpc.is_none() {
            return Err(ResolveError::directory(
                "payload has neither blockchain.rpcs nor blockchain.custom_rpc",
            ));
        }

        let abi = match payload.abi {
            Some(value) => parse_inline_abi(value).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Inline registry ABI unusable, falling back to built-in ABI");
                registry_abi::default_registry_abi()
            }),
            None => registry_abi::default_registry_abi(),
        };

        Ok(Self {
            contract_address,
            abi,
            rpc_endpoints: rpcs.unwrap_or_default(),
            preferred_rpc: custom_rpc.filter(|url| !url.trim().is_empty()),
        })
    }
}

// ABI 可能是 JSON 数组，也可能是被再次字符串化的 JSON
fn parse_inline_abi(value: serde_json::Value) -> Result<Abi, serde_json::Error> {
    match value {
        serde_json::Value::String(raw) => serde_json::from_str(&raw),
        other => serde_json::from_value(other),
    }
}
