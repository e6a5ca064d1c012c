//! 测试辅助模块
//! 提供假的合约目录服务和假的 EVM JSON-RPC 节点（按 4 字节选择器应答 eth_call）

#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use conft_resolver::{
    config::{Config, DirectoryConfig, LoggingConfig, ResolverConfig, RpcConfig},
    domain::DEFAULT_PROTOCOL_NAME,
};
use ethers::{
    abi::{self, ParamType, Token},
    types::Address,
    utils::id,
};
use serde_json::{json, Value};

pub const REGISTRY_CONTRACT: &str = "0xabc0000000000000000000000000000000000001";
pub const OWNER: &str = "0x1234000000000000000000000000000000005678";

pub fn owner() -> Address {
    OWNER.parse().unwrap()
}

/// 在随机端口启动 axum 服务，返回 `http://127.0.0.1:port`
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

// ============ 假目录服务 ============

/// 网络 ID → 原始响应体；未登记的网络返回 404
pub async fn spawn_directory(entries: HashMap<String, String>) -> String {
    let router = Router::new()
        .route("/chains/:chain_id/contracts/domains", get(directory_handler))
        .with_state(Arc::new(entries));
    spawn(router).await
}

async fn directory_handler(
    State(entries): State<Arc<HashMap<String, String>>>,
    Path(chain_id): Path<String>,
) -> impl IntoResponse {
    match entries.get(&chain_id) {
        Some(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body.clone(),
        ),
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            r#"{"message":"Not Found"}"#.to_string(),
        ),
    }
}

pub fn directory_entry(rpcs: &[&str], custom_rpc: Option<&str>) -> String {
    json!({
        "address": REGISTRY_CONTRACT,
        "blockchain": { "rpcs": rpcs, "custom_rpc": custom_rpc }
    })
    .to_string()
}

// ============ 假注册合约（JSON-RPC） ============

#[derive(Debug, Clone, Default)]
pub struct FakeRegistry {
    pub tld: String,
    /// 方法名 → (参数 → 地址)；未登记的方法一律 revert
    pub methods: HashMap<&'static str, HashMap<String, Address>>,
}

impl FakeRegistry {
    pub fn new(tld: &str) -> Self {
        Self {
            tld: tld.to_string(),
            methods: HashMap::new(),
        }
    }

    pub fn with_entry(mut self, method: &'static str, name: &str, address: Address) -> Self {
        self.methods
            .entry(method)
            .or_default()
            .insert(name.to_string(), address);
        self
    }

    pub fn with_method(mut self, method: &'static str) -> Self {
        self.methods.entry(method).or_default();
        self
    }

    fn answer(&self, calldata: &[u8]) -> Option<Vec<u8>> {
        if calldata.len() < 4 {
            return None;
        }
        let (selector, args) = calldata.split_at(4);

        if selector == id("TOP_LEVEL_DOMAIN()") {
            return Some(abi::encode(&[Token::String(self.tld.clone())]));
        }

        for (method, names) in &self.methods {
            if selector == id(format!("{}(string)", method)) {
                let name = match abi::decode(&[ParamType::String], args).ok()?.pop()? {
                    Token::String(name) => name,
                    _ => return None,
                };
                let address = names.get(&name).copied().unwrap_or_else(Address::zero);
                return Some(abi::encode(&[Token::Address(address)]));
            }
        }
        None
    }
}

pub async fn spawn_rpc(registry: FakeRegistry) -> String {
    let router = Router::new()
        .route("/", post(rpc_handler))
        .with_state(Arc::new(registry));
    spawn(router).await
}

async fn rpc_handler(
    State(registry): State<Arc<FakeRegistry>>,
    Json(request): Json<Value>,
) -> Json<Value> {
    let id = request["id"].clone();
    if request["method"] != "eth_call" {
        return Json(json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": { "code": -32601, "message": "method not found" }
        }));
    }

    let tx = &request["params"][0];
    let data = tx
        .get("data")
        .or_else(|| tx.get("input"))
        .and_then(|v| v.as_str())
        .unwrap_or("0x");
    let calldata = hex::decode(data.trim_start_matches("0x")).unwrap_or_default();

    match registry.answer(&calldata) {
        Some(output) => Json(json!({
            "jsonrpc": "2.0",
            "id": id,
            "result": format!("0x{}", hex::encode(output))
        })),
        None => Json(json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": { "code": 3, "message": "execution reverted", "data": "0x" }
        })),
    }
}

// ============ 配置 ============

pub fn test_config(directory_host: &str) -> Config {
    Config {
        directory: DirectoryConfig {
            host: directory_host.to_string(),
            request_timeout_secs: 5,
        },
        rpc: RpcConfig {
            request_timeout_secs: 5,
        },
        resolver: ResolverConfig {
            resolve_timeout_secs: 15,
            protocol_name: DEFAULT_PROTOCOL_NAME.to_string(),
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "text".to_string(),
        },
    }
}

pub const SHORT_TIMEOUT: Duration = Duration::from_secs(5);
