//! Salary tracker HTTP server.
//!
//! Reads the configuration directory named by `SALARY_TRACKER_CONFIG`
//! (default `./config/default`), seeds the store and serves the API.

use std::process::ExitCode;

use salary_tracker::api::{AppState, create_router};
use salary_tracker::config::ConfigLoader;
use salary_tracker::logging::init_logging;
use tracing::{error, info};

const DEFAULT_CONFIG_DIR: &str = "./config/default";

#[tokio::main]
async fn main() -> ExitCode {
    let config_dir =
        std::env::var("SALARY_TRACKER_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());

    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("salary-tracker: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logging(&config.config().server().logging) {
        eprintln!("salary-tracker: could not install log subscriber: {err}");
    }

    let address = config.bind_address();
    let state = match AppState::from_config(config) {
        Ok(state) => state,
        Err(err) => {
            error!(error = %err, "Seeding the store failed");
            return ExitCode::FAILURE;
        }
    };

    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(address = %address, error = %err, "Could not bind");
            return ExitCode::FAILURE;
        }
    };

    info!(address = %address, config_dir = %config_dir, "Salary tracker listening");
    if let Err(err) = axum::serve(listener, create_router(state)).await {
        error!(error = %err, "Server stopped");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
