pub mod config;
pub mod cors;
pub mod rocket;
