//! 解析错误类型
//!
//! 所有错误只在 DomainResolver 内部流转，对外统一折叠为 `None`。

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("invalid network id: {0:?}")]
    InvalidNetworkId(String),

    #[error("domain is empty")]
    EmptyDomain,

    #[error("registry directory entry not found: {0}")]
    DirectoryNotFound(String),

    #[error("no usable RPC endpoint in registry descriptor")]
    NoUsableEndpoint,

    #[error("contract call {method} failed: {reason}")]
    ContractCallFailed { method: String, reason: String },

    #[error("no address resolved for {0:?}")]
    NoAddressResolved(String),

    #[error("resolution timed out after {0} ms")]
    Timeout(u64),
}

impl ResolveError {
    /// 日志用的稳定错误码
    pub fn code(&self) -> &'static str {
        match self {
            ResolveError::InvalidNetworkId(_) => "invalid_network_id",
            ResolveError::EmptyDomain => "empty_domain",
            ResolveError::DirectoryNotFound(_) => "directory_not_found",
            ResolveError::NoUsableEndpoint => "no_usable_endpoint",
            ResolveError::ContractCallFailed { .. } => "contract_call_failed",
            ResolveError::NoAddressResolved(_) => "no_address_resolved",
            ResolveError::Timeout(_) => "timeout",
        }
    }

    pub fn directory(reason: impl Into<String>) -> Self {
        ResolveError::DirectoryNotFound(reason.into())
    }

    pub fn contract_call(method: impl Into<String>, reason: impl ToString) -> Self {
        ResolveError::ContractCallFailed {
            method: method.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(
            ResolveError::InvalidNetworkId("eip155".into()).code(),
            "invalid_network_id"
        );
        assert_eq!(ResolveError::directory("404").code(), "directory_not_found");
        assert_eq!(
            ResolveError::contract_call("TOP_LEVEL_DOMAIN", "reverted").code(),
            "contract_call_failed"
        );
    }

    #[test]
    fn test_error_display_includes_context() {
        let err = ResolveError::contract_call("TOP_LEVEL_DOMAIN", "execution reverted");
        assert_eq!(
            err.to_string(),
            "contract call TOP_LEVEL_DOMAIN failed: execution reverted"
        );
        assert_eq!(
            ResolveError::Timeout(1500).to_string(),
            "resolution timed out after 1500 ms"
        );
    }
}
