use std::sync::Arc;

use rocket::async_trait;

use super::config::{CompletionConfig, Transport};
use super::error::CompletionError;
use super::http_connection::HttpCompletionConnection;
use super::openai_connection::OpenAIConnection;

/// Submits a system and a user instruction as one chat exchange and returns the
/// text of the first choice. An answer without choices or content is returned as
/// an empty string.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError>;
}

#[derive(Clone)]
pub struct CompletionConnection {
    // shared across requests, rocket hands out clones through the request guard
    provider: Arc<dyn CompletionProvider>,
}

impl CompletionConnection {
    pub fn new(config: &CompletionConfig) -> Result<Self, CompletionError> {
        let provider: Arc<dyn CompletionProvider> = match config.transport {
            Transport::Sdk => Arc::new(OpenAIConnection::new(config)),
            Transport::Http => Arc::new(HttpCompletionConnection::new(config)?),
        };
        Ok(Self { provider })
    }

    pub fn from_provider<P>(provider: P) -> Self
    where
        P: CompletionProvider + 'static,
    {
        Self {
            provider: Arc::new(provider),
        }
    }

    pub async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError> {
        self.provider.complete(system, user).await
    }
}
