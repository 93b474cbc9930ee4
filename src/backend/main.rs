/**
 * Kanban Server Entry Point
 *
 * Loads configuration, initializes tracing and serves the board/card API
 * until interrupted. Exits non-zero if startup fails.
 */

use std::process::ExitCode;

use kanban::backend::server::{config::load_config, init::run};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info,tower_http=debug".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        listen_address = %config.listen_address,
        db_path = %config.db_path.display(),
        cors = config.cors_enabled(),
        "Starting kanban server"
    );

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Server failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
