//! Store mode and write outcomes

use serde::{Deserialize, Serialize};

/// Which backing store the process selected at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreMode {
    Remote,
    Local,
}

impl std::fmt::Display for StoreMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreMode::Remote => write!(f, "remote"),
            StoreMode::Local => write!(f, "local"),
        }
    }
}

/// Result of a work write that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkWrite {
    /// Written to the remote document store
    Persisted,
    /// Accepted by the local store
    Mock,
}

impl WorkWrite {
    pub fn message(&self) -> &'static str {
        match self {
            WorkWrite::Persisted => "Work created successfully",
            WorkWrite::Mock => "Work created (Mock)",
        }
    }
}

/// Which backing store accepted a config or slide write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Memory and remote store both updated
    Remote,
    /// Local mode, memory only
    Memory,
    /// Remote write failed; only memory holds the new value
    MemoryAfterRemoteFailure,
}

impl SaveOutcome {
    /// Human readable message, e.g. `"Config saved to Firestore"`
    pub fn message(&self, subject: &str) -> String {
        match self {
            SaveOutcome::Remote => format!("{} saved to Firestore", subject),
            SaveOutcome::Memory => format!("{} saved to Memory", subject),
            SaveOutcome::MemoryAfterRemoteFailure => {
                format!("{} saved to Memory (DB Failed)", subject)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_messages() {
        assert_eq!(SaveOutcome::Remote.message("Config"), "Config saved to Firestore");
        assert_eq!(SaveOutcome::Memory.message("Slides"), "Slides saved to Memory");
        assert_eq!(
            SaveOutcome::MemoryAfterRemoteFailure.message("Slides"),
            "Slides saved to Memory (DB Failed)"
        );
    }

    #[test]
    fn test_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&StoreMode::Local).unwrap(), "\"local\"");
        assert_eq!(StoreMode::Remote.to_string(), "remote");
    }
}
