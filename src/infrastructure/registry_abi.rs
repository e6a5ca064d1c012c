//! 内置注册合约 ABI
//!
//! 目录服务未内联 ABI 时使用。同时收录三个 name→address 入口，
//! 实际存在哪个由链上调用结果决定。

use ethers::abi::Abi;
use once_cell::sync::Lazy;

pub const TOP_LEVEL_DOMAIN_METHOD: &str = "TOP_LEVEL_DOMAIN";

const REGISTRY_ABI_JSON: &str = r#"[
  {
    "name": "TOP_LEVEL_DOMAIN",
    "type": "function",
    "inputs": [],
    "outputs": [{ "name": "", "type": "string", "internalType": "string" }],
    "stateMutability": "view"
  },
  {
    "name": "nameToAddress",
    "type": "function",
    "inputs": [{ "name": "domainName", "type": "string", "internalType": "string" }],
    "outputs": [{ "name": "", "type": "address", "internalType": "address" }],
    "stateMutability": "view"
  },
  {
    "name": "nameToAdress",
    "type": "function",
    "inputs": [{ "name": "domainName", "type": "string", "internalType": "string" }],
    "outputs": [{ "name": "", "type": "address", "internalType": "address" }],
    "stateMutability": "view"
  },
  {
    "name": "fullNameToAddress",
    "type": "function",
    "inputs": [{ "name": "fullDomainName", "type": "string", "internalType": "string" }],
    "outputs": [{ "name": "", "type": "address", "internalType": "address" }],
    "stateMutability": "view"
  }
]"#;

static DEFAULT_REGISTRY_ABI: Lazy<Abi> = Lazy::new(|| {
    serde_json::from_str(REGISTRY_ABI_JSON).expect("built-in registry ABI literal is valid JSON")
});

pub fn default_registry_abi() -> Abi {
    DEFAULT_REGISTRY_ABI.clone()
}
