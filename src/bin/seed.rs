use catalog_server_lib::api::config::Config;
use catalog_server_lib::data::database::Database;
use catalog_server_lib::services::seed_service::SeedService;
use catalog_server_lib::utils::logging::init_tracing;
use std::process::ExitCode;

/// Loads the demo catalog into an empty database.
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

    match SeedService::new(db).seed().await {
        Ok(Some(summary)) => {
            tracing::info!(
                categories = summary.categories,
                products = summary.products,
                customers = summary.customers,
                orders = summary.orders,
                order_id = summary.order_id,
                "Seed data loaded"
            );
            ExitCode::SUCCESS
        }
        Ok(None) => {
            tracing::info!("Categories already present, seed skipped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Seeding failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
