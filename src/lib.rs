//! conft-resolver - Conft 链上域名解析
//!
//! 把 `alice.conft` 这类域名解析为钱包地址：查询合约目录服务，
//! 连接对应网络的注册合约，依次探测各代合约的 name→address 入口。

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod service;

pub use error::ResolveError;

pub mod prelude {
    pub use crate::{
        config::Config,
        domain::{NameLookupResponse, NetworkId, RegistryDescriptor, ResolutionResult},
        error::ResolveError,
        service::DomainResolver,
    };
}
