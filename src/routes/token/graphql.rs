use async_graphql::{
    Context, EmptySubscription, ErrorExtensions, Object, Result, Schema, http::GraphiQLSource,
};
use axum::{
    extract::{Json, State},
    response::{Html, IntoResponse},
};

use crate::{
    AppState,
    models::{Token, TokenInput},
    services::{TokenError, TokenService, parse_token_id},
};

pub const GRAPHQL_PATH: &str = "/tokens/graphql";

pub type TokenSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(tokens: TokenService) -> TokenSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(tokens)
        .finish()
}

impl ErrorExtensions for TokenError {
    fn extend(&self) -> async_graphql::Error {
        let code = match self {
            TokenError::NotFound(_) => "NOT_FOUND",
            TokenError::MalformedIdentifier(_) => "MALFORMED_IDENTIFIER",
            TokenError::Store(_) => "STORE_ERROR",
        };
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn get_all_token(&self, ctx: &Context<'_>) -> Result<Vec<Token>> {
        let tokens = ctx.data::<TokenService>()?;
        tokens.find_all().await.map_err(|e| e.extend())
    }

    async fn get_token_by_id(&self, ctx: &Context<'_>, token_id: String) -> Result<Token> {
        let tokens = ctx.data::<TokenService>()?;
        let id = parse_token_id(&token_id).map_err(|e| e.extend())?;
        tokens.find_by_id(id).await.map_err(|e| e.extend())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_token(&self, ctx: &Context<'_>, token: TokenInput) -> Result<Token> {
        let tokens = ctx.data::<TokenService>()?;
        tokens.save(token.into()).await.map_err(|e| e.extend())
    }

    /// 成功时总是返回 true，不存在的 ID 也算成功
    async fn delete_token(&self, ctx: &Context<'_>, token_id: String) -> Result<bool> {
        let tokens = ctx.data::<TokenService>()?;
        let id = parse_token_id(&token_id).map_err(|e| e.extend())?;
        tokens.delete_by_id(id).await.map_err(|e| e.extend())?;
        Ok(true)
    }
}

pub async fn graphql_handler(
    State(state): State<AppState>,
    Json(req): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(state.schema.execute(req).await)
}

pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
