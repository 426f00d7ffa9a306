//! # TaskVault API Server
//!
//! HTTP backend for user accounts and per-user task management.
//!
//! ## Startup
//!
//! 1. Load configuration from the environment
//! 2. Wait for the database to accept connections
//! 3. Create the connection pool and ensure the schema exists
//! 4. Serve until interrupted, then close the pool
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p taskvault-api
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taskvault_api::{
    app::{build_router, AppState},
    config::Config,
};
use taskvault_shared::db::{
    pool::{close_pool, create_pool, wait_for_database},
    schema::ensure_schema,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskvault_api=info,taskvault_shared=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "TaskVault API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    wait_for_database(&config.database.url, 10).await?;
    let pool = create_pool(&config.database_config()).await?;
    ensure_schema(&pool).await?;

    let bind_address = config.bind_address();
    let state = AppState::new(pool.clone(), config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown signal received, exiting...");
    close_pool(pool).await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", err);
    }
}
