//! Credits Service - Main Application Entry Point
//!
//! This is a REST API server for tracking per-application customer credit
//! balances. It converts paid currency amounts into credits at a configured
//! rate and applies them to balances atomically.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables (including the conversion rate)
//! 2. Create database connection pool
//! 3. Run database migrations
//! 4. Build HTTP router with the credit service as shared state
//! 5. Start server on configured port

use tracing_subscriber::EnvFilter;

use credits_web_server::{config, db, router, services::credit_service::CreditService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
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

    // The service carries the immutable conversion rate for the process lifetime
    let service = CreditService::new(pool, config.conversion_rate);
    tracing::info!(rate = config.conversion_rate, "Credit service initialized");

    let app = router(service);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}
