//! Error types for the dp-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("Failed to read scenario file: {path}")]
    ScenarioFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for dp-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<dp_scenario::ScenarioError> for AppError {
    fn from(err: dp_scenario::ScenarioError) -> Self {
        AppError::Scenario(err.to_string())
    }
}

impl From<dp_sim::SimError> for AppError {
    fn from(err: dp_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}
