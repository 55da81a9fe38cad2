//! 需要一个可用的 Redis：`REDIS_URL=redis://127.0.0.1:6379 cargo test -- --ignored`

use std::sync::Arc;
use std::time::Duration;

use token_service::{
    cache::{RedisTokenStore, TokenStore},
    models::Token,
};

fn store() -> Option<RedisTokenStore> {
    let url = std::env::var("REDIS_URL").ok()?;
    let client = redis::Client::open(url).unwrap();
    Some(RedisTokenStore::new(Arc::new(client)))
}

#[tokio::test]
#[ignore]
async fn redis_put_get_scan_delete() {
    let Some(store) = store() else {
        return;
    };
    let token = Token::new("redis");
    let key = token.key();

    store.put(&key, &token, Duration::from_secs(30)).await.unwrap();
    assert_eq!(store.get(&key).await.unwrap(), Some(token.clone()));

    let scanned = store.scan().await.unwrap();
    assert_eq!(scanned.iter().filter(|t| t.id == token.id).count(), 1);

    store.delete(&key).await.unwrap();
    store.delete(&key).await.unwrap();
    assert_eq!(store.get(&key).await.unwrap(), None);
}

#[tokio::test]
#[ignore]
async fn redis_expires_entries_by_itself() {
    let Some(store) = store() else {
        return;
    };
    let token = Token::new("short-lived");
    let key = token.key();

    store.put(&key, &token, Duration::from_secs(1)).await.unwrap();
    tokio::time::sleep(Duration::from_millis(1500)).await;

    assert_eq!(store.get(&key).await.unwrap(), None);
}
