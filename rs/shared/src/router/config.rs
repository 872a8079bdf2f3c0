use std::net::IpAddr;

use crate::connections::{env_lookup, lookup_or, lookup_parsed, ConfigError};
use crate::constant::{DEFAULT_ADDRESS, DEFAULT_PORT};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup_parsed(&lookup, "PORT", DEFAULT_PORT)
            .map_err(|e| ConfigError::ParseIntError(e, "PORT".to_owned()))?;
        let address = lookup_or(&lookup, "HOST", DEFAULT_ADDRESS);
        let address = address
            .parse()
            .map_err(|_| ConfigError::UnknownVariant("HOST".to_owned(), address))?;
        Ok(Self { address, port })
    }
}
