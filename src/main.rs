use catalog_server_lib::api::config::Config;
use catalog_server_lib::api::server;
use catalog_server_lib::data::database::Database;
use catalog_server_lib::utils::logging::init_tracing;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing("info");
            tracing::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log_filter);

    let db = match Database::new(&config) {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to create DB pool: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = server::start(&config, db).await {
        tracing::error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
