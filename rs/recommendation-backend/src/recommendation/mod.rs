pub mod error;
pub mod extract;
pub mod generate;
pub mod prompt;
pub mod recommendations;
pub mod request;
pub mod route;
