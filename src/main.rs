//! kvss - Main Application Entry Point
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create the SQLite connection pool
//! 3. Run database migrations
//! 4. Construct the key generator and clock, build the router
//! 5. Start the server on the configured port

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use kvss::{AppState, app, clock::SystemClock, config, db, keygen::KeyGenerator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG (defaults to "info")
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Create database pool
    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    // Run migrations
    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    // The RNG is seeded once here and injected; no global random state
    let state = AppState::new(pool, KeyGenerator::from_time_seed(), Arc::new(SystemClock));
    let app = app(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests, handled concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}
