use std::sync::Arc;

use parking_lot::Mutex;
use rocket::async_trait;
use serde_json::Value;

use crate::connections::openai::{error::CompletionError, provider::CompletionProvider};

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionCall {
    pub system: String,
    pub user: String,
}

#[derive(Debug, Clone)]
pub enum MockReply {
    Text(String),
    Api { status: u16, details: Value },
}

/// Stands in for the upstream API: answers every call with the same reply and
/// records what it was asked. Clones share the call log.
#[derive(Clone)]
pub struct MockCompletion {
    reply: MockReply,
    calls: Arc<Mutex<Vec<CompletionCall>>>,
}

impl MockCompletion {
    pub fn new(reply: MockReply) -> Self {
        Self {
            reply,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
    pub fn text(text: &str) -> Self {
        Self::new(MockReply::Text(text.to_string()))
    }
    pub fn api_error(status: u16, details: Value) -> Self {
        Self::new(MockReply::Api { status, details })
    }
    pub fn calls(&self) -> Vec<CompletionCall> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletion {
    async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError> {
        self.calls.lock().push(CompletionCall {
            system: system.to_string(),
            user: user.to_string(),
        });
        match &self.reply {
            MockReply::Text(text) => Ok(text.clone()),
            MockReply::Api { status, details } => Err(CompletionError::Api {
                status: Some(*status),
                details: details.clone(),
            }),
        }
    }
}
