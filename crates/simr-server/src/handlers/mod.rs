//! HTTP handlers

pub mod config;
pub mod hero_slides;
pub mod works;

use crate::AppState;
use axum::{extract::State, Json};
use simr_core::{HealthResponse, RootResponse};

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Welcome to SIMR 2026 API".to_string(),
        status: "running".to_string(),
    })
}

/// Reports which store the process selected at startup
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        store: state.store.mode(),
    })
}
