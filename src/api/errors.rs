use crate::api::response::ErrorDetail;
use crate::services::errors::{CatalogServiceError, OrderServiceError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bigdecimal::BigDecimal;

/// Failures as the HTTP layer reports them.
#[derive(Debug)]
pub enum APIErrors {
    NotFound {
        code: &'static str,
        detail: String,
    },
    InsufficientStock {
        available: BigDecimal,
        requested: BigDecimal,
    },
    Validation(String),
    Internal,
}

impl IntoResponse for APIErrors {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            APIErrors::NotFound { code, detail } => (
                StatusCode::NOT_FOUND,
                ErrorDetail::new(detail, code),
            ),
            APIErrors::InsufficientStock {
                available,
                requested,
            } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    detail: format!(
                        "Insufficient stock. Available: {}, requested: {}",
                        available, requested
                    ),
                    code: Some("insufficient_stock".to_string()),
                    available: Some(available),
                    requested: Some(requested),
                },
            ),
            APIErrors::Validation(detail) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail::new(detail, "validation_error"),
            ),
            APIErrors::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::new("Database error".to_string(), "storage_error"),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<OrderServiceError> for APIErrors {
    fn from(err: OrderServiceError) -> Self {
        match err {
            OrderServiceError::OrderNotFound(_) => APIErrors::NotFound {
                code: "order_not_found",
                detail: err.to_string(),
            },
            OrderServiceError::ProductNotFound(_) => APIErrors::NotFound {
                code: "product_not_found",
                detail: err.to_string(),
            },
            OrderServiceError::InsufficientStock {
                available,
                requested,
            } => APIErrors::InsufficientStock {
                available,
                requested,
            },
            OrderServiceError::Store(e) => {
                tracing::error!("Storage failure while adding order line: {}", e);
                APIErrors::Internal
            }
        }
    }
}

impl From<CatalogServiceError> for APIErrors {
    fn from(err: CatalogServiceError) -> Self {
        match err {
            CatalogServiceError::Store(e) => {
                tracing::error!("Storage failure while reading catalog: {}", e);
                APIErrors::Internal
            }
        }
    }
}
