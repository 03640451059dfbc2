use crate::api::config::Config;
use crate::api::routes::{category_routes, order_routes, product_routes};
use crate::data::repos::traits::store::Store;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builds the full router over `store`.
pub fn app<S: Store>(store: S) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let v1 = Router::new()
        .nest("/categories", category_routes::routes::<S>())
        .nest("/products", product_routes::routes::<S>())
        .nest("/orders", order_routes::routes::<S>());

    Router::new()
        .route("/api", get(|| async { "Catalog Server API is running!" }))
        .nest("/api/v1", v1)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(store)
}

pub async fn start<S: Store>(config: &Config, store: S) -> std::io::Result<()> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app(store))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
