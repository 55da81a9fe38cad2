use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use redis::{AsyncCommands, AsyncIter, Client as RedisClient};

use crate::cache::keys::{token_key, token_pattern};
use crate::cache::store::{StoreError, TokenStore};
use crate::models::Token;

/// 基于 Redis 的令牌存储，过期由 `SET ... EX` 交给 Redis 处理
#[derive(Clone)]
pub struct RedisTokenStore {
    redis: Arc<RedisClient>,
}

impl RedisTokenStore {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl TokenStore for RedisTokenStore {
    async fn put(&self, key: &str, token: &Token, ttl: Duration) -> Result<(), StoreError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let json = serde_json::to_string(token)?;
        // Redis 的 EX 最小为 1 秒
        let _: () = conn
            .set_ex(token_key(key), json, ttl.as_secs().max(1))
            .await?;

        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Token>, StoreError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let result: Option<String> = conn.get(token_key(key)).await?;

        match result {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let _: () = conn.del(token_key(key)).await?;

        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Token>, StoreError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let keys: Vec<String> = {
            let iter: AsyncIter<String> = conn.scan_match(token_pattern()).await?;
            unique_keys(iter.collect::<Vec<String>>().await)
        };
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        // 显式 MGET，单个键时也返回数组
        let values: Vec<Option<String>> = redis::cmd("MGET")
            .arg(&keys)
            .query_async(&mut conn)
            .await?;

        decode_tokens(values)
    }
}

/// SCAN 可能重复返回同一个键
fn unique_keys(keys: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(keys.len());
    keys.into_iter()
        .filter(|key| seen.insert(key.clone()))
        .collect()
}

/// 扫描与读取之间过期的键在 MGET 中为 nil，直接跳过
fn decode_tokens(values: Vec<Option<String>>) -> Result<Vec<Token>, StoreError> {
    values
        .into_iter()
        .flatten()
        .map(|json| serde_json::from_str(&json).map_err(StoreError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_scan_keys_are_dropped() {
        let keys = vec![
            "token:a".to_string(),
            "token:b".to_string(),
            "token:a".to_string(),
        ];
        assert_eq!(unique_keys(keys), vec!["token:a", "token:b"]);
    }

    #[test]
    fn expired_values_are_skipped() {
        let token = Token::new("abc");
        let json = serde_json::to_string(&token).unwrap();

        let tokens = decode_tokens(vec![None, Some(json), None]).unwrap();
        assert_eq!(tokens, vec![token]);
    }

    #[test]
    fn corrupt_value_is_a_serialization_error() {
        let err = decode_tokens(vec![Some("not json".into())]).unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
