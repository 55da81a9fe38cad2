use axum::{
    extract::{Json, Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{AppState, error::AppError, models::Token, services::parse_token_id};

#[axum::debug_handler]
pub async fn find_all(State(state): State<AppState>) -> Result<Json<Vec<Token>>, AppError> {
    Ok(Json(state.tokens.find_all().await?))
}

#[axum::debug_handler]
pub async fn find_by_id(
    State(state): State<AppState>,
    Path(token_id): Path<String>,
) -> Result<Json<Token>, AppError> {
    let id = parse_token_id(&token_id)?;
    Ok(Json(state.tokens.find_by_id(id).await?))
}

/// 创建或整体覆盖，`expiration` 以服务端配置为准
#[axum::debug_handler]
pub async fn create_or_update(
    State(state): State<AppState>,
    payload: Result<Json<Token>, JsonRejection>,
) -> Result<Json<Token>, AppError> {
    let Json(token) = payload?;
    Ok(Json(state.tokens.save(token).await?))
}

#[axum::debug_handler]
pub async fn delete_by_id(
    State(state): State<AppState>,
    Path(token_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_token_id(&token_id)?;
    state.tokens.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
