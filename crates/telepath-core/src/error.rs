//! Error types for Telepath packing

use thiserror::Error;

/// Core Telepath errors
#[derive(Error, Debug)]
pub enum TelepathError {
    // Dispatch errors
    #[error("No adapter registered for type {type_name}")]
    UnregisteredType { type_name: &'static str },

    #[error("Adapter {constructor} cannot pack {type_name}: {reason}")]
    AdapterContract {
        constructor: String,
        type_name: &'static str,
        reason: String,
    },

    // Graph shape errors
    #[error("Maximum packing depth exceeded: limit {limit}")]
    DepthLimitExceeded { limit: usize },

    // Value errors
    #[error("Number has no wire representation: {0}")]
    NonFiniteNumber(f64),

    // Encoding errors
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TelepathError {
    /// True for errors caused by a misconfigured registry or adapter rather than by the input value
    pub fn is_programming_error(&self) -> bool {
        matches!(
            self,
            TelepathError::UnregisteredType { .. } | TelepathError::AdapterContract { .. }
        )
    }
}

/// Result type for Telepath operations
pub type TelepathResult<T> = Result<T, TelepathError>;
