use std::sync::Arc;

use cache::TokenStore;
use routes::token::{TokenSchema, build_schema};
use services::{TokenConfig, TokenService};

pub mod cache;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

#[derive(Clone)]
pub struct AppState {
    pub tokens: TokenService,
    pub schema: TokenSchema,
}

impl AppState {
    pub fn new(store: Arc<dyn TokenStore>, config: TokenConfig) -> Self {
        let tokens = TokenService::new(store, config);
        let schema = build_schema(tokens.clone());
        Self { tokens, schema }
    }
}
