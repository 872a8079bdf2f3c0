use async_openai::error::OpenAIError;
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompletionError {
    /// The upstream answered with a non-success status or an API error object.
    #[error("Upstream API error: {details}")]
    Api { status: Option<u16>, details: Value },
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("OpenAI client error: {0}")]
    OpenAI(#[source] OpenAIError),
    #[error("Failed to decode completion response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<OpenAIError> for CompletionError {
    fn from(error: OpenAIError) -> Self {
        match error {
            OpenAIError::ApiError(api_error) => CompletionError::Api {
                status: None,
                details: json!({
                    "error": {
                        "message": api_error.message,
                        "type": api_error.r#type,
                        "param": api_error.param,
                        "code": api_error.code,
                    }
                }),
            },
            other => CompletionError::OpenAI(other),
        }
    }
}
