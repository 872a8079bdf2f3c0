pub mod error;
pub mod health;
pub mod recommendation;
pub mod server;
