pub mod config;
pub mod error;
mod fairing;
pub mod http_connection;
pub mod messages;
pub mod openai_connection;
pub mod provider;
