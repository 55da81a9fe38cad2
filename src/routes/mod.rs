use axum::{Router, middleware, routing::get};
use tower::ServiceBuilder;

use crate::{AppState, middleware::log_errors};

pub mod ping;
pub mod token;

// 创建主路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(ping::ping))
        .merge(token::routes())
        .layer(ServiceBuilder::new().layer(middleware::from_fn(log_errors)))
        .with_state(state)
}
