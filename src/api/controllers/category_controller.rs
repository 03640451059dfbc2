use crate::api::errors::APIErrors;
use crate::api::response::{CategoryResponse, CategoryTreeResponse};
use crate::data::repos::traits::store::Store;
use crate::services::category_service::CategoryService;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

/// Get all categories as a flat list
pub async fn get_categories<S: Store>(State(store): State<S>) -> impl IntoResponse {
    let service = CategoryService::new(store);

    match service.list_categories().await {
        Ok(categories) => {
            let response: Vec<CategoryResponse> = categories
                .into_iter()
                .map(CategoryResponse::from)
                .collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => APIErrors::from(e).into_response(),
    }
}

/// Get the category forest with direct product counts
pub async fn get_category_tree<S: Store>(State(store): State<S>) -> impl IntoResponse {
    let service = CategoryService::new(store);

    match service.get_category_tree().await {
        Ok(roots) => {
            let response: Vec<CategoryTreeResponse> = roots
                .into_iter()
                .map(CategoryTreeResponse::from)
                .collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => APIErrors::from(e).into_response(),
    }
}
