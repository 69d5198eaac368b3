//! Response bodies

use crate::StoreMode;
use serde::{Deserialize, Serialize};

/// `GET /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
}

/// `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub store: StoreMode,
}

/// `POST /works`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkCreatedResponse {
    pub message: String,
    pub id: String,
}

/// Plain acknowledgement used by the config and slide writes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
