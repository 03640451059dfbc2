use crate::api::controllers::order_controller;
use crate::data::repos::traits::store::Store;
use axum::routing::post;
use axum::Router;

pub fn routes<S: Store>() -> Router<S> {
    Router::new().route("/items", post(order_controller::add_line_to_order::<S>))
}
