use crate::api::controllers::category_controller;
use crate::data::repos::traits::store::Store;
use axum::routing::get;
use axum::Router;

pub fn routes<S: Store>() -> Router<S> {
    Router::new()
        .route("/", get(category_controller::get_categories::<S>))
        .route("/tree", get(category_controller::get_category_tree::<S>))
}
