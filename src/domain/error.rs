use thiserror::Error;

/// Rejected world configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("iterations must be at least 1")]
    ZeroIterations,
    #[error("history capacity must be at least 1")]
    ZeroHistoryCapacity,
    #[error("gravity must be finite, got ({x}, {y})")]
    NonFiniteGravity { x: f32, y: f32 },
}
