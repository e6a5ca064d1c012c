//! 网络标识解析
//!
//! 宿主传入的是 CAIP-2 风格的复合标识（`"<namespace>:<id>"`，如 `eip155:137`），
//! 目录服务只认识第二段的数字链 ID。

use std::fmt;

use crate::error::ResolveError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NetworkId(String);

impl NetworkId {
    /// 按 `:` 切分并取第二段；缺失或为空即无效，不做默认值替换
    pub fn parse(composite: &str) -> Result<Self, ResolveError> {
        match composite.split(':').nth(1) {
            Some(id) if !id.is_empty() => Ok(Self(id.to_string())),
            _ => Err(ResolveError::InvalidNetworkId(composite.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
