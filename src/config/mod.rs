use std::env;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// 令牌存储后端
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Redis,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub redis_url: Option<String>,
    pub store_backend: StoreBackend,
    pub token_ttl_secs: u64,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let ttl = env::var("TOKEN_TTL").map_err(|_| ConfigError::Missing("TOKEN_TTL"))?;
        let token_ttl_secs = parse_ttl_secs(&ttl).ok_or(ConfigError::Invalid {
            key: "TOKEN_TTL",
            value: ttl.clone(),
        })?;

        let store_backend = match env::var("STORE_BACKEND") {
            Ok(v) => match v.trim().to_ascii_lowercase().as_str() {
                "redis" => StoreBackend::Redis,
                "memory" => StoreBackend::Memory,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "STORE_BACKEND",
                        value: v,
                    });
                }
            },
            Err(_) => StoreBackend::Redis,
        };

        let redis_url = env::var("REDIS_URL").ok();
        if store_backend == StoreBackend::Redis && redis_url.is_none() {
            return Err(ConfigError::Missing("REDIS_URL"));
        }

        Ok(Config {
            redis_url,
            store_backend,
            token_ttl_secs,
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
        })
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }
}

/// 解析 TTL，支持纯秒数以及 `s`/`m`/`h` 后缀，零值视为无效
fn parse_ttl_secs(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    let (digits, unit) = match raw.char_indices().last()? {
        (i, 's') => (&raw[..i], 1),
        (i, 'm') => (&raw[..i], 60),
        (i, 'h') => (&raw[..i], 3600),
        _ => (raw, 1),
    };

    digits
        .trim()
        .parse::<u64>()
        .ok()
        .and_then(|n| n.checked_mul(unit))
        .filter(|secs| *secs > 0)
}

#[cfg(test)]
mod tests {
    use super::parse_ttl_secs;

    #[test]
    fn ttl_accepts_plain_seconds_and_suffixes() {
        assert_eq!(parse_ttl_secs("30"), Some(30));
        assert_eq!(parse_ttl_secs("30s"), Some(30));
        assert_eq!(parse_ttl_secs("5m"), Some(300));
        assert_eq!(parse_ttl_secs(" 2h "), Some(7200));
    }

    #[test]
    fn ttl_rejects_zero_and_garbage() {
        assert_eq!(parse_ttl_secs("0"), None);
        assert_eq!(parse_ttl_secs("0h"), None);
        assert_eq!(parse_ttl_secs(""), None);
        assert_eq!(parse_ttl_secs("ten"), None);
        assert_eq!(parse_ttl_secs("-5"), None);
    }
}
