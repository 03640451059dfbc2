use crate::api::errors::APIErrors;
use crate::api::response::ProductResponse;
use crate::data::repos::traits::store::Store;
use crate::services::product_service::ProductService;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

/// Get all products
pub async fn get_products<S: Store>(State(store): State<S>) -> impl IntoResponse {
    let service = ProductService::new(store);

    match service.list_products().await {
        Ok(products) => {
            let response: Vec<ProductResponse> =
                products.into_iter().map(ProductResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => APIErrors::from(e).into_response(),
    }
}
