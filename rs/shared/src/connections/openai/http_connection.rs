use std::sync::Arc;

use reqwest::{Client, StatusCode};
use rocket::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::config::CompletionConfig;
use super::error::CompletionError;
use super::provider::CompletionProvider;

#[derive(Serialize, Debug)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize, Debug)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize, Debug)]
struct ChatCompletionReply {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: Option<ChatChoiceMessage>,
}

#[derive(Deserialize, Debug)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Raw transport: posts the chat completion payload with reqwest and decodes the
/// reply by hand, keeping the upstream error body when the status is not a success.
#[derive(Clone)]
pub struct HttpCompletionConnection {
    client: Arc<Client>,
    config: CompletionConfig,
}

impl HttpCompletionConnection {
    pub fn new(config: &CompletionConfig) -> Result<Self, CompletionError> {
        let client = Client::builder().use_rustls_tls().build()?;
        Ok(Self {
            client: Arc::new(client),
            config: config.clone(),
        })
    }

    fn body<'a>(&'a self, system: &'a str, user: &'a str) -> ChatCompletionBody<'a> {
        ChatCompletionBody {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }
}

#[async_trait]
impl CompletionProvider for HttpCompletionConnection {
    async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError> {
        let endpoint = self.config.get_uri();
        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&self.body(system, user))
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        debug!("POST {endpoint} -> {status}, {} bytes", text.len());
        parse_completion_reply(status, &text)
    }
}

fn parse_completion_reply(status: StatusCode, text: &str) -> Result<String, CompletionError> {
    if !status.is_success() {
        let details = serde_json::from_str::<Value>(text)
            .unwrap_or_else(|_| Value::String(text.to_owned()));
        return Err(CompletionError::Api {
            status: Some(status.as_u16()),
            details,
        });
    }
    let reply: ChatCompletionReply = serde_json::from_str(text)?;
    Ok(reply
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .unwrap_or_default())
}
