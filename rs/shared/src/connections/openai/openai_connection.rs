use std::time::Duration;

use async_openai::types::{
    ChatCompletionRequestMessage, CreateChatCompletionRequest, CreateChatCompletionResponse,
};
use async_openai::{config::OpenAIConfig, error::OpenAIError, Client};
use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use rocket::async_trait;

use super::config::CompletionConfig;
use super::error::CompletionError;
use super::messages::{create_system_message, create_user_message};
use super::provider::CompletionProvider;

pub struct OpenAIConnection {
    pub client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAIConnection {
    pub fn new(config: &CompletionConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.api_key.clone())
            .with_api_base(config.api_base.clone());
        Self {
            client: Client::with_config(openai_config).with_backoff(single_attempt()),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
    // COMPLETION REQUEST
    #[allow(deprecated)]
    pub fn request_builder(
        &self,
        messages: Vec<ChatCompletionRequestMessage>,
    ) -> CreateChatCompletionRequest {
        CreateChatCompletionRequest {
            model: self.model.clone(),
            messages,
            max_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
            n: Some(1),
            ..Default::default()
        }
    }
    // CHAT COMPLETION
    pub async fn create_completion(
        &self,
        request: CreateChatCompletionRequest,
    ) -> Result<CreateChatCompletionResponse, OpenAIError> {
        self.client.chat().create(request).await
    }
}

#[async_trait]
impl CompletionProvider for OpenAIConnection {
    async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError> {
        let messages = vec![create_system_message(system), create_user_message(user)];
        let request = self.request_builder(messages);
        let response = self.create_completion(request).await?;
        Ok(first_choice_content(response))
    }
}

// the client retries 429 and 5xx until the backoff elapses; zero means one attempt
fn single_attempt() -> ExponentialBackoff {
    ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build()
}

fn first_choice_content(response: CreateChatCompletionResponse) -> String {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .unwrap_or_default()
}
