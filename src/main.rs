use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use token_service::{
    AppState,
    cache::{MemoryTokenStore, RedisTokenStore, TokenStore},
    config::{Config, StoreBackend},
    routes,
    services::TokenConfig,
};
#[cfg(debug_assertions)]
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!("Token TTL set to {}s", config.token_ttl_secs);

    // 选择存储后端
    let store: Arc<dyn TokenStore> = match (config.store_backend, config.redis_url.as_deref()) {
        (StoreBackend::Redis, Some(url)) => {
            let redis_client = redis::Client::open(url).expect("Failed to create Redis client");
            tracing::info!("Using Redis token store");
            Arc::new(RedisTokenStore::new(Arc::new(redis_client)))
        }
        _ => {
            tracing::warn!("Using in-memory token store, tokens are lost on restart");
            Arc::new(MemoryTokenStore::new())
        }
    };

    // 设置应用状态
    let state = AppState::new(store, TokenConfig::from(&config));
    let router = routes::create_router(state);

    // 根据编译模式决定是否添加CORS
    #[cfg(debug_assertions)]
    let router = {
        tracing::debug!("Adding CORS layer for development mode");
        router.layer(CorsLayer::permissive())
    };

    // 启动服务器
    let addr = SocketAddr::new(
        config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        config.server_port,
    );
    tracing::info!("Server listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        router,
    )
    .await
    .expect("Failed to start server");
}
