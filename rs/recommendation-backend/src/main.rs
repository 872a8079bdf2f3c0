use recommendation_backend::{
    error::RecommendationBackendError, server::initialize_recommendation_backend,
};
use shared::{log_error, setup_tracing, CompletionConfig, CompletionConnection, ServerConfig};
use tracing::info;

#[rocket::main]
async fn main() -> Result<(), RecommendationBackendError> {
    dotenv::dotenv().ok();
    setup_tracing(false);

    let server_config = ServerConfig::new().map_err(|e| log_error!(e))?;
    let completion_config = CompletionConfig::new().map_err(|e| log_error!(e))?;
    info!(
        "Starting recommendation backend on {}:{} (model: {}, transport: {})",
        server_config.address,
        server_config.port,
        completion_config.model,
        completion_config.transport
    );

    let completion = CompletionConnection::new(&completion_config).map_err(|e| log_error!(e))?;
    let server = initialize_recommendation_backend(&server_config, completion);

    server.launch().await?;
    Ok(())
}
