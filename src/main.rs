use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod db;
mod error;
mod models;
mod routes;

use config::{Config, DEFAULT_LOG_FILTER};

#[tokio::main]
async fn main() {
    // .env must be loaded before the filter is built so its RUST_LOG applies
    dotenvy::dotenv().ok();

    let config = Config::from_env().expect("Invalid server configuration");

    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting player roster server...");

    let pool = db::connect(&config.database_url)
        .await
        .expect("Failed to open player store");

    tracing::info!(database_url = %config.database_url, "Player store ready.");

    let addr = config.socket_addr();
    let app = routes::router(pool.clone());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Failed to start server.");

    pool.close().await;
    tracing::info!("Player store closed.");
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
