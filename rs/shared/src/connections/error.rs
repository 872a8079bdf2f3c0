use std::{
    env::VarError,
    num::{ParseFloatError, ParseIntError},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Error: {0}, Environment variable {1}")]
    EnvVarError(#[source] VarError, String),
    #[error("Error: {0}, Environment variable {1}")]
    ParseFloatError(#[source] ParseFloatError, String),
    #[error("Error: {0}, Environment variable {1}")]
    ParseIntError(#[source] ParseIntError, String),
    #[error("Unknown value '{1}' for environment variable {0}")]
    UnknownVariant(String, String),
}
