//! conft-resolver 命令行入口
//!
//! 用法：`conft-resolver <chain-id> <domain>`，例如 `conft-resolver eip155:137 alice.conft`

use anyhow::Result;
use conft_resolver::{config::Config, infrastructure::logging, service::DomainResolver};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. 加载环境变量
    dotenvy::dotenv().ok();

    // 2. 加载配置（CONFIG_PATH 指向的 TOML 文件优先）
    let config_path = std::env::var("CONFIG_PATH").ok();
    let config = Config::from_env_and_file(config_path.as_deref())?;

    // 3. 初始化日志
    if let Err(e) = logging::init_logging(&config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let mut args = std::env::args().skip(1);
    let (Some(chain_id), Some(domain)) = (args.next(), args.next()) else {
        eprintln!("usage: conft-resolver <chain-id> <domain>");
        std::process::exit(2);
    };

    let resolver = DomainResolver::from_config(&config)?;
    let response = resolver
        .resolve(&chain_id, &domain)
        .await
        .map(|result| result.into_lookup_response(&config.resolver.protocol_name));

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
