#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;

use config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("http client init failed: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("{0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("ignoring unreadable .env: {e}");
        }
    }
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let port = config.port;
    tracing::info!(
        backend = %config.backend_url,
        request_timeout_secs = config.timeouts.request_secs,
        "backend configured"
    );

    let state = state::AppState::new(config)?;
    let app = routes::leptos_app(state).map_err(StartupError::Leptos)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!(%port, "attendance host listening");
    axum::serve(listener, app).await?;
    Ok(())
}
