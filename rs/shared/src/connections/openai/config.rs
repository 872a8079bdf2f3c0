use std::fmt;

use strum::{Display, EnumString};

use crate::connections::{
    env_lookup, lookup_or, lookup_parsed, lookup_required, ConfigError,
};
use crate::constant::{
    DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, OPENAI_API_BASE, OPENAI_CHAT_COMPLETIONS_PATH,
    OPENAI_CHAT_MODEL_MINI,
};

/// How the chat completion request leaves the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Transport {
    /// async-openai client
    Sdk,
    /// plain reqwest POST against the chat completions endpoint
    Http,
}

#[derive(Clone)]
pub struct CompletionConfig {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub transport: Transport,
}

impl CompletionConfig {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup_required(&lookup, "OPENAI_API_KEY")?;
        let api_base = lookup_or(&lookup, "OPENAI_BASE_URL", OPENAI_API_BASE);
        let model = lookup_or(&lookup, "OPENAI_MODEL", OPENAI_CHAT_MODEL_MINI);
        let temperature = lookup_parsed(&lookup, "OPENAI_TEMPERATURE", DEFAULT_TEMPERATURE)
            .map_err(|e| ConfigError::ParseFloatError(e, "OPENAI_TEMPERATURE".to_owned()))?;
        let max_tokens = lookup_parsed(&lookup, "OPENAI_MAX_TOKENS", DEFAULT_MAX_TOKENS)
            .map_err(|e| ConfigError::ParseIntError(e, "OPENAI_MAX_TOKENS".to_owned()))?;
        let transport = lookup_parsed(&lookup, "OPENAI_TRANSPORT", Transport::Http).map_err(|_| {
            ConfigError::UnknownVariant(
                "OPENAI_TRANSPORT".to_owned(),
                lookup("OPENAI_TRANSPORT").unwrap_or_default(),
            )
        })?;

        Ok(Self {
            api_key,
            api_base: api_base.trim_end_matches('/').to_owned(),
            model,
            temperature,
            max_tokens,
            transport,
        })
    }

    pub fn get_uri(&self) -> String {
        format!("{}/{}", self.api_base, OPENAI_CHAT_COMPLETIONS_PATH)
    }
}

// keeps the credential out of logs
impl fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}
