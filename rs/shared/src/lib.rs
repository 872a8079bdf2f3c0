pub mod connections;
pub mod constant;
pub mod mock;
pub mod router;
pub mod tracing;

// openai
pub use crate::connections::openai::config::{CompletionConfig, Transport};
pub use crate::connections::openai::error::CompletionError;
pub use crate::connections::openai::provider::{CompletionConnection, CompletionProvider};

// router
pub use crate::router::config::ServerConfig;
pub use crate::router::rocket::build_rocket;

// util
pub use crate::connections::ConfigError;
pub use crate::tracing::setup::setup_tracing;
