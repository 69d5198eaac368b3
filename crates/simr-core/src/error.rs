//! Error types for SIMR

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimrError>;

#[derive(Error, Debug)]
pub enum SimrError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The remote store answered, but with an error
    #[error("Remote store error: {0}")]
    Remote(String),

    /// The remote store could not be reached
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Credentials error: {0}")]
    Credentials(String),

    /// A stored document did not have the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for SimrError {
    fn from(e: serde_json::Error) -> Self {
        SimrError::Serialization(e.to_string())
    }
}
