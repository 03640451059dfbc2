use crate::api::controllers::product_controller;
use crate::data::repos::traits::store::Store;
use axum::routing::get;
use axum::Router;

pub fn routes<S: Store>() -> Router<S> {
    Router::new().route("/", get(product_controller::get_products::<S>))
}
