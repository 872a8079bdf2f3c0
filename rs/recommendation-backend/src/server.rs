use rocket::{routes, Build, Rocket};
use shared::{build_rocket, CompletionConnection, ServerConfig};

use crate::health::health;
use crate::recommendation::route::recommendations;

pub fn initialize_recommendation_backend(
    config: &ServerConfig,
    completion: CompletionConnection,
) -> Rocket<Build> {
    build_rocket(config, completion, routes![health, recommendations])
}

#[cfg(test)]
pub fn test_server(mock: &shared::mock::completion::MockCompletion) -> Rocket<Build> {
    test_server_with(CompletionConnection::from_provider(mock.clone()))
}

#[cfg(test)]
pub fn test_server_with(completion: CompletionConnection) -> Rocket<Build> {
    let config = ServerConfig::from_lookup(|_| None).expect("default server config");
    initialize_recommendation_backend(&config, completion)
}
