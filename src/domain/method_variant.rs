//! 注册合约的 name→address 入口
//!
//! 不同时期部署的注册合约对同一语义暴露了不同的函数签名（其中一个还拼错了），
//! 解析时按固定优先级逐个探测。

use std::fmt;

/// 查询参数取基础名还是完整域名
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupArgument {
    BaseDomain,
    FullName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryMethodVariant {
    /// `nameToAddress(string)`，参数为基础名
    NameToAddress,
    /// `nameToAdress(string)`，早期合约的拼写错误版本，参数为基础名
    NameToAdress,
    /// `fullNameToAddress(string)`，参数为完整域名
    FullNameToAddress,
}

impl RegistryMethodVariant {
    /// 探测顺序
    pub const PRIORITY: [RegistryMethodVariant; 3] = [
        RegistryMethodVariant::NameToAddress,
        RegistryMethodVariant::NameToAdress,
        RegistryMethodVariant::FullNameToAddress,
    ];

    pub fn method_name(self) -> &'static str {
        match self {
            RegistryMethodVariant::NameToAddress => "nameToAddress",
            RegistryMethodVariant::NameToAdress => "nameToAdress",
            RegistryMethodVariant::FullNameToAddress => "fullNameToAddress",
        }
    }

    pub fn signature(self) -> &'static str {
        match self {
            RegistryMethodVariant::NameToAddress => "nameToAddress(string)",
            RegistryMethodVariant::NameToAdress => "nameToAdress(string)",
            RegistryMethodVariant::FullNameToAddress => "fullNameToAddress(string)",
        }
    }

    pub fn argument_kind(self) -> LookupArgument {
        match self {
            RegistryMethodVariant::NameToAddress | RegistryMethodVariant::NameToAdress => {
                LookupArgument::BaseDomain
            }
            RegistryMethodVariant::FullNameToAddress => LookupArgument::FullName,
        }
    }

    /// 从基础名和完整域名中挑出该入口需要的参数
    pub fn select_argument<'a>(self, base_domain: &'a str, full_name: &'a str) -> &'a str {
        match self.argument_kind() {
            LookupArgument::BaseDomain => base_domain,
            LookupArgument::FullName => full_name,
        }
    }
}

impl fmt::Display for RegistryMethodVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}
