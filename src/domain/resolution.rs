//! 解析结果与宿主响应结构

use ethers::{types::Address, utils::to_checksum};
use serde::{Serialize, Serializer};

pub const DEFAULT_PROTOCOL_NAME: &str = "Conft Domains";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionResult {
    #[serde(serialize_with = "serialize_checksum")]
    pub resolved_address: Address,
    pub domain_name: String,
}

impl ResolutionResult {
    /// EIP-55 校验和格式
    pub fn checksum_address(&self) -> String {
        to_checksum(&self.resolved_address, None)
    }

    pub fn into_lookup_response(self, protocol: &str) -> NameLookupResponse {
        NameLookupResponse {
            resolved_addresses: vec![ResolvedAddress {
                resolved_address: self.checksum_address(),
                protocol: protocol.to_string(),
                domain_name: self.domain_name,
            }],
        }
    }
}

/// 钱包名称查询接口期望的响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameLookupResponse {
    pub resolved_addresses: Vec<ResolvedAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAddress {
    pub resolved_address: String,
    pub protocol: String,
    pub domain_name: String,
}

fn serialize_checksum<S: Serializer>(address: &Address, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&to_checksum(address, None))
}
