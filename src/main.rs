mod config;
mod error;
mod routes;
mod state;
mod upstream;

use crate::config::ConsoleConfig;
use crate::error::StartupError;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ConsoleConfig::from_env()?;

    // Refuse to serve a console whose route table collides.
    let registry = console_client::routes::registry()?;
    tracing::info!(routes = registry.len(), "route table validated");

    let upstream = upstream::UpstreamClient::new(&config.upstream_base_url, config.timeouts)?;
    tracing::info!(
        upstream = upstream.base_url(),
        request_timeout_secs = config.timeouts.request_secs,
        "management api upstream configured"
    );

    let state = state::AppState::new(upstream);
    let app = routes::app(state)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, "tenant console listening");
    axum::serve(listener, app).await?;
    Ok(())
}
