use crate::api::errors::APIErrors;
use crate::api::extractors::ValidatedJson;
use crate::api::request::AddLineToOrderRequest;
use crate::api::response::OrderLineResponse;
use crate::data::repos::traits::store::Store;
use crate::services::order_service::OrderService;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

/// Add a product to an order, merging with an existing line for the same product
pub async fn add_line_to_order<S: Store>(
    State(store): State<S>,
    ValidatedJson(payload): ValidatedJson<AddLineToOrderRequest>,
) -> impl IntoResponse {
    let service = OrderService::new(store);

    tracing::info!(
        order_id = payload.order_id,
        product_id = payload.product_id,
        quantity = %payload.quantity,
        "Adding product to order"
    );

    match service
        .add_line_to_order(payload.order_id, payload.product_id, payload.quantity)
        .await
    {
        Ok(line) => (StatusCode::OK, Json(OrderLineResponse::from(line))).into_response(),
        Err(e) => APIErrors::from(e).into_response(),
    }
}
