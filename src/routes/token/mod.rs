mod graphql;
mod handler;

use axum::{Router, routing::get};

use crate::AppState;

pub use graphql::{GRAPHQL_PATH, MutationRoot, QueryRoot, TokenSchema, build_schema};

/// REST 与 GraphQL 两套入口，都挂在 `/tokens` 下
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tokens", get(handler::find_all).post(handler::create_or_update))
        .route(
            GRAPHQL_PATH,
            get(graphql::graphiql).post(graphql::graphql_handler),
        )
        .route(
            "/tokens/{token_id}",
            get(handler::find_by_id).delete(handler::delete_by_id),
        )
}
