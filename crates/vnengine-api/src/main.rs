//! VN Engine play server entry point.

use std::error::Error;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use vnengine_api::config::ServerConfig;
use vnengine_api::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting VN Engine play server");

    // Read configuration from environment.
    let config = ServerConfig::from_env()?;
    let addr = config.addr()?;

    // Load and check the story before accepting players.
    let app_state = AppState::load(&config)?;

    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = vnengine_api::app(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
