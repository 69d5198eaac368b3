//! Global configuration handlers

use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::AppState;
use axum::{extract::State, Json};
use simr_core::{ConfigDocument, MessageResponse};

pub async fn get(State(state): State<AppState>) -> Json<ConfigDocument> {
    Json(state.store.read_config().await)
}

pub async fn save(
    State(state): State<AppState>,
    JsonBody(config): JsonBody<ConfigDocument>,
) -> Result<Json<MessageResponse>, ApiError> {
    let outcome = state.store.write_config(config).await;
    Ok(Json(MessageResponse::new(outcome.message("Config"))))
}
