mod config;
mod errors;
mod features;
mod model;
mod models;
mod prediction;
mod routes;
mod state;
mod ui;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::{AppState, ModelStatus};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails only on an unparsable PORT)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Salary API v{}", env!("CARGO_PKG_VERSION"));

    // Load model + schema once; a failure leaves the service up but Unready
    let model = ModelStatus::load(&config);
    if model.is_ready() {
        info!("Model ready");
    }

    let state = AppState::new(config.clone(), model);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
