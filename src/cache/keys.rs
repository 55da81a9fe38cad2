/// 令牌缓存键前缀
const TOKEN_PREFIX: &str = "token:";

/// 生成令牌缓存键
pub fn token_key(id: &str) -> String {
    format!("{}{}", TOKEN_PREFIX, id)
}

/// 匹配全部令牌键的 SCAN 模式
pub fn token_pattern() -> String {
    format!("{}*", TOKEN_PREFIX)
}
