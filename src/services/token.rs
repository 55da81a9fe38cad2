use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, error};
use uuid::Uuid;

use crate::cache::{StoreError, TokenStore};
use crate::config::Config;
use crate::models::Token;

#[derive(Debug, Error)]
pub enum TokenError {
    /// 从未写入和已过期无法区分
    #[error("token {0} not found")]
    NotFound(Uuid),
    #[error("malformed token id: {0:?}")]
    MalformedIdentifier(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// 进程级 TTL 策略，启动时加载一次
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenConfig {
    pub ttl: Duration,
}

impl TokenConfig {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }
}

impl From<&Config> for TokenConfig {
    fn from(config: &Config) -> Self {
        Self::new(config.token_ttl())
    }
}

/// 带连字符的 UUID 文本长度
const HYPHENATED_LEN: usize = 36;

/// 在访问存储之前把字符串解析为令牌 ID，只接受带连字符的标准形式
pub fn parse_token_id(raw: &str) -> Result<Uuid, TokenError> {
    if raw.len() != HYPHENATED_LEN {
        return Err(TokenError::MalformedIdentifier(raw.to_string()));
    }
    Uuid::try_parse(raw).map_err(|_| TokenError::MalformedIdentifier(raw.to_string()))
}

/// 令牌服务
///
/// 每次保存都把 `expiration` 覆盖为配置的 TTL，每个操作只访问一次存储。
#[derive(Clone)]
pub struct TokenService {
    store: Arc<dyn TokenStore>,
    config: TokenConfig,
}

impl TokenService {
    pub fn new(store: Arc<dyn TokenStore>, config: TokenConfig) -> Self {
        Self { store, config }
    }

    /// 写入或整体覆盖
    pub async fn save(&self, mut token: Token) -> Result<Token, TokenError> {
        token.expiration = self.config.ttl.as_secs();

        self.store
            .put(&token.key(), &token, self.config.ttl)
            .await
            .inspect_err(|e| error!("Failed to save token {}: {}", token.id, e))?;

        debug!("Saved token {} with ttl {}s", token.id, token.expiration);
        Ok(token)
    }

    pub async fn find_all(&self) -> Result<Vec<Token>, TokenError> {
        let tokens = self
            .store
            .scan()
            .await
            .inspect_err(|e| error!("Failed to scan tokens: {}", e))?;

        debug!("Found {} live tokens", tokens.len());
        Ok(tokens)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Token, TokenError> {
        self.store
            .get(&id.to_string())
            .await
            .inspect_err(|e| error!("Failed to read token {}: {}", id, e))?
            .ok_or(TokenError::NotFound(id))
    }

    /// 幂等：不存在或已过期都算成功
    pub async fn delete_by_id(&self, id: Uuid) -> Result<(), TokenError> {
        self.store
            .delete(&id.to_string())
            .await
            .inspect_err(|e| error!("Failed to delete token {}: {}", id, e))?;

        debug!("Deleted token {}", id);
        Ok(())
    }
}
