mod config;
mod routes;

use config::{ConfigError, HostConfig};

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Leptos(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), HostError> {
    // A missing .env file is not an error.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = HostConfig::from_env()?;
    let app = routes::app().map_err(HostError::Leptos)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    tracing::info!(port = config.port, chat_endpoint = wire::chat_endpoint(), "newsdesk listening");
    axum::serve(listener, app).await?;
    Ok(())
}
