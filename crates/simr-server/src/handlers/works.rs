//! Work handlers

use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use simr_core::{Work, WorkCreatedResponse};
use tracing::info;

pub async fn list(State(state): State<AppState>) -> Json<Vec<Work>> {
    Json(state.store.read_works().await)
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(work): JsonBody<Work>,
) -> Result<(StatusCode, Json<WorkCreatedResponse>), ApiError> {
    info!("Creating work {}", work.id);

    let written = state.store.write_work(&work).await?;

    Ok((
        StatusCode::CREATED,
        Json(WorkCreatedResponse {
            message: written.message().to_string(),
            id: work.id,
        }),
    ))
}
