use shared::{CompletionError, ConfigError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecommendationBackendError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("Completion client error: {0}")]
    CompletionError(#[from] CompletionError),
    #[error("Rocket error: {0}")]
    RocketError(#[from] rocket::Error),
}
