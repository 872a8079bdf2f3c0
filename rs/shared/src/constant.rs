// recommendation-backend
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ADDRESS: &str = "0.0.0.0";
pub const HEALTH_STATUS_MESSAGE: &str = "Backend is running ✅";

// openai
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
pub const OPENAI_CHAT_MODEL_MINI: &str = "gpt-4o-mini";
pub const OPENAI_CHAT_COMPLETIONS_PATH: &str = "chat/completions";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
