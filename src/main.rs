//! Main entry point for the shipments service.
//!
//! Loads configuration from the environment, opens the PostgreSQL pool,
//! makes sure the `shipments` table exists and then serves the HTTP API.
//! The listener is only bound once the schema is in place.

mod api;
mod config;
mod constants;
mod db;
mod errors;
mod schema;
mod utils;

use config::Config;
use constants::{DEFAULT_LOG_LEVEL, SERVER_PORT};
use db::{Database, PgShipmentRepository, SharedRepository, ShipmentRepository};
use errors::Error;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Opens the pool and initializes the schema.
fn bootstrap(config: &Config) -> Result<PgShipmentRepository, Error> {
    let database = Database::new(&config.database_url)?;
    let repository = PgShipmentRepository::new(database);
    repository.initialize_schema()?;
    Ok(repository)
}

/// Main entry point that initializes and runs the application.
///
/// # Initialization steps:
/// 1. Load `.env` and initialize logging
/// 2. Read configuration
/// 3. Connect to the database and create the table if missing
/// 4. Serve HTTP until shutdown
#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    utils::init_logging(DEFAULT_LOG_LEVEL);
    if let Err(e) = dotenv {
        warn!("Failed to load .env file: {}", e);
    }

    let config = Config::from_env();

    let repository = match tokio::task::spawn_blocking(move || bootstrap(&config)).await {
        Ok(Ok(repository)) => repository,
        Ok(Err(e)) => {
            error!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            error!("Database initialization task failed: {}", e);
            std::process::exit(1);
        }
    };
    info!("Database schema ready");

    let repository: SharedRepository = Arc::new(repository);
    if let Err(e) = api::server::launch_server(repository, SERVER_PORT).await {
        error!("Failed to start server: {}", e);
        std::process::exit(1);
    }
}
