//! Hero slide handlers

use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::AppState;
use axum::{extract::State, Json};
use simr_core::{HeroSlide, MessageResponse};
use tracing::info;

pub async fn list(State(state): State<AppState>) -> Json<Vec<HeroSlide>> {
    Json(state.store.read_hero_slides().await)
}

/// The posted list replaces every stored slide
pub async fn save(
    State(state): State<AppState>,
    JsonBody(slides): JsonBody<Vec<HeroSlide>>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!("Replacing hero slides with {} entries", slides.len());

    let outcome = state.store.write_hero_slides(slides).await;
    Ok(Json(MessageResponse::new(outcome.message("Slides"))))
}
