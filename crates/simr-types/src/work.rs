//! Work types

use serde::{Deserialize, Serialize};

/// A submitted academic work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    /// Client-assigned, unique within the works collection
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub specialty: String,
    pub status: String,
}

impl Work {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        kind: impl Into<String>,
        specialty: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            kind: kind.into(),
            specialty: specialty.into(),
            status: status.into(),
        }
    }
}
