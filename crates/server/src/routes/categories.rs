use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use models::category::{self, CategoryInput};
use tracing::info;

use crate::errors::ApiError;
use crate::routes::{parse_body, parse_id, Message, INVALID_BODY, INVALID_PAYLOAD};
use crate::state::AppState;

const ENTITY: &str = "Category";

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<category::Model>>, ApiError> {
    let items = state.categories.get_all().await?;
    info!(count = items.len(), "list categories");
    Ok(Json(items))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<category::Model>), ApiError> {
    let input: CategoryInput = parse_body(body, INVALID_PAYLOAD)?;
    let created = state.categories.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<category::Model>, ApiError> {
    let id = parse_id(id, ENTITY)?;
    Ok(Json(state.categories.get_by_id(id).await?))
}

/// The path id is authoritative; an `id` in the body is ignored.
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<category::Model>, ApiError> {
    let id = parse_id(id, ENTITY)?;
    let input: CategoryInput = parse_body(body, INVALID_BODY)?;
    Ok(Json(state.categories.update(id, input).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Message>, ApiError> {
    let id = parse_id(id, ENTITY)?;
    state.categories.delete(id).await?;
    Ok(Json(Message::deleted(ENTITY)))
}
