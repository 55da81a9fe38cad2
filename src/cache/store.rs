use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Token;

/// 存储层错误，原样向上传递，不做重试
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 带过期时间的键值存储
///
/// TTL 由存储自身负责，调用方不需要任何清理任务。
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// 写入或覆盖，并重新开始计时
    async fn put(&self, key: &str, token: &Token, ttl: Duration) -> Result<(), StoreError>;

    async fn get(&self, key: &str) -> Result<Option<Token>, StoreError>;

    /// 键不存在时什么也不做
    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// 返回所有未过期的记录，顺序不保证
    async fn scan(&self) -> Result<Vec<Token>, StoreError>;
}
