use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::cache::store::{StoreError, TokenStore};
use crate::models::Token;

struct Entry {
    token: Token,
    deadline: Instant,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.deadline > now
    }
}

/// 进程内令牌存储
///
/// 每个条目带有截止时间，过期条目在下一次访问时被丢弃，没有后台清理任务。
/// 使用 `tokio::time::Instant`，测试中可以暂停并推进时钟。
#[derive(Default)]
pub struct MemoryTokenStore {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前未过期的条目数
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        let entries = self.entries.lock().await;
        entries.values().filter(|entry| entry.is_live(now)).count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn put(&self, key: &str, token: &Token, ttl: Duration) -> Result<(), StoreError> {
        let entry = Entry {
            token: token.clone(),
            deadline: Instant::now() + ttl,
        };
        self.entries.lock().await.insert(key.to_string(), entry);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Token>, StoreError> {
        let now = Instant::now();
        let mut entries = self.entries.lock().await;

        match entries.get(key) {
            Some(entry) if entry.is_live(now) => Ok(Some(entry.token.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.entries.lock().await.remove(key);
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Token>, StoreError> {
        let now = Instant::now();
        let mut entries = self.entries.lock().await;

        entries.retain(|_, entry| entry.is_live(now));
        Ok(entries.values().map(|entry| entry.token.clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(5);

    #[tokio::test]
    async fn get_returns_what_was_put() {
        let store = MemoryTokenStore::new();
        let token = Token::new("abc");

        store.put(&token.key(), &token, TTL).await.unwrap();

        assert_eq!(store.get(&token.key()).await.unwrap(), Some(token));
    }

    #[tokio::test(start_paused = true)]
    async fn entries_vanish_after_ttl() {
        let store = MemoryTokenStore::new();
        let token = Token::new("abc");
        store.put(&token.key(), &token, TTL).await.unwrap();

        tokio::time::advance(TTL - Duration::from_millis(1)).await;
        assert!(store.get(&token.key()).await.unwrap().is_some());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(store.get(&token.key()).await.unwrap().is_none());
        assert!(store.scan().await.unwrap().is_empty());
        assert!(store.is_empty().await);
    }

    #[tokio::test(start_paused = true)]
    async fn put_restarts_the_timer() {
        let store = MemoryTokenStore::new();
        let token = Token::new("abc");
        store.put(&token.key(), &token, TTL).await.unwrap();

        tokio::time::advance(Duration::from_secs(4)).await;
        store.put(&token.key(), &token, TTL).await.unwrap();
        tokio::time::advance(Duration::from_secs(4)).await;

        assert!(store.get(&token.key()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn delete_missing_key_is_ok() {
        let store = MemoryTokenStore::new();
        store.delete("missing").await.unwrap();
        store.delete("missing").await.unwrap();
    }
}
