/**
 * Server Initialization
 *
 * This module handles the initialization of the Axum HTTP server: opening
 * the database, building the application state and router, binding the
 * listener and serving until shutdown.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite database and create the schema
 * 2. Create `AppState` around the pool
 * 3. Create the router (routes, tracing, CORS)
 * 4. Bind the listen address and serve
 *
 * Any failure in steps 1-4 is returned to the caller; the binary turns it
 * into a non-zero exit.
 */

use axum::Router;
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// Opens the database named by `config.db_path`, creating the schema if
/// needed, and returns the router ready to serve.
///
/// # Errors
///
/// - `DatabaseError` if the database cannot be opened or the schema created
/// - `ConfigError` if the CORS origin is unusable
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing kanban backend server");

    let db_pool = load_database(config).await?;
    build_app(db_pool, config)
}

/// Build the application around an already opened pool
///
/// The schema must already exist; tests use this to inject their own pool.
pub fn build_app(db_pool: SqlitePool, config: &AppConfig) -> Result<Router<()>, BackendError> {
    let app_state = AppState::new(db_pool);
    let app = create_router(app_state, config)?;

    tracing::info!("Router configured");
    Ok(app)
}

/// Bind the configured address and serve until Ctrl-C or SIGTERM
pub async fn run(config: AppConfig) -> Result<(), BackendError> {
    let app = create_app(&config).await?;

    let listener = tokio::net::TcpListener::bind(&config.listen_address)
        .await
        .map_err(|e| {
            tracing::error!("Failed to bind {}: {}", config.listen_address, e);
            e
        })?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
