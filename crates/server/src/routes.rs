use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{de::DeserializeOwned, Serialize};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::errors::ApiError;
use crate::state::AppState;

pub mod categories;
pub mod products;

pub(crate) const INVALID_PAYLOAD: &str = "Invalid request payload";
pub(crate) const INVALID_BODY: &str = "Invalid request body";

/// Body of a successful delete.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn deleted(entity: &str) -> Self {
        Self { message: format!("{} deleted successfully", entity) }
    }
}

pub async fn health() -> Json<Health> {
    Json(Health::running())
}

async fn not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "route not found")
}

/// Path identifier as an integer, or 400 `Invalid <entity> Id`.
pub(crate) fn parse_id(
    path: Result<Path<i32>, PathRejection>,
    entity: &str,
) -> Result<i32, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|_| ApiError::bad_request(format!("Invalid {} Id", entity)))
}

/// First JSON value of the body, or 400 with the fixed `message`.
///
/// `Content-Type` is not checked. A `null` body decodes to `T::default()`
/// and bytes after the first value are left unread.
pub(crate) fn parse_body<T>(
    body: Result<Bytes, BytesRejection>,
    message: &str,
) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    let bytes = body.map_err(|_| ApiError::bad_request(message))?;
    match serde_json::Deserializer::from_slice(&bytes).into_iter::<Option<T>>().next() {
        Some(Ok(value)) => Ok(value.unwrap_or_default()),
        _ => Err(ApiError::bad_request(message)),
    }
}

/// Build the full application router
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/api/products", get(products::list).post(products::create))
        .route(
            "/api/products/:id",
            get(products::get).put(products::update).delete(products::delete),
        )
        .route("/api/categories", get(categories::list).post(categories::create))
        .route(
            "/api/categories/:id",
            get(categories::get).put(categories::update).delete(categories::delete),
        );

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .fallback(not_found)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
