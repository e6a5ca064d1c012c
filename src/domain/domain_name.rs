//! 域名拆分与拼接

/// 取第一个 `.` 之前的部分；没有 `.` 时原样返回，空串进空串出
pub fn base_domain(domain: &str) -> &str {
    match domain.split_once('.') {
        Some((base, _)) => base,
        None => domain,
    }
}

/// 基础名 + 注册合约返回的 TLD，直接拼接，不插入分隔符
pub fn compose_full_name(base: &str, top_level_domain: &str) -> String {
    let mut full = String::with_capacity(base.len() + top_level_domain.len());
    full.push_str(base);
    full.push_str(top_level_domain);
    full
}
