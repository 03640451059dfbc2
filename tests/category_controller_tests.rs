mod common;

use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode};
use catalog_server_lib::api::response::{CategoryResponse, CategoryTreeResponse, ErrorDetail};
use catalog_server_lib::api::server::app;
use catalog_server_lib::data::repos::implementors::memory_store::InMemoryStore;
use common::{add_category, add_product};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn get(store: InMemoryStore, uri: &str) -> (StatusCode, Bytes) {
    let response = app(store)
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body)
}

async fn setup() -> InMemoryStore {
    let store = InMemoryStore::new();
    let root = add_category(&store, "Home Appliances", None).await;
    let fridges = add_category(&store, "Refrigerators", Some(root.category_id)).await;
    add_category(&store, "Computers", None).await;
    add_product(&store, "Atlant", "3", "18000", Some(fridges.category_id)).await;
    add_product(&store, "LG", "4", "45000", Some(fridges.category_id)).await;
    store
}

#[tokio::test]
async fn test_get_categories() {
    let (status, body) = get(setup().await, "/api/v1/categories").await;

    assert_eq!(status, StatusCode::OK);
    let categories: Vec<CategoryResponse> = serde_json::from_slice(&body).unwrap();
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Computers", "Home Appliances", "Refrigerators"]);
    assert_eq!(categories[0].parent_id, None);
    assert_eq!(categories[2].parent_id, Some(categories[1].id));
}

#[tokio::test]
async fn test_get_category_tree() {
    let (status, body) = get(setup().await, "/api/v1/categories/tree").await;

    assert_eq!(status, StatusCode::OK);
    let tree: Vec<CategoryTreeResponse> = serde_json::from_slice(&body).unwrap();
    assert_eq!(tree.len(), 2);

    let appliances = &tree[1];
    assert_eq!(appliances.name, "Home Appliances");
    assert_eq!(appliances.item_count, 0);
    assert_eq!(appliances.children.len(), 1);
    assert_eq!(appliances.children[0].name, "Refrigerators");
    assert_eq!(appliances.children[0].item_count, 2);
    assert!(appliances.children[0].children.is_empty());
}

#[tokio::test]
async fn test_get_category_tree_json_shape() {
    let store = InMemoryStore::new();
    add_category(&store, "Computers", None).await;

    let (_, body) = get(store, "/api/v1/categories/tree").await;

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"id": 1, "name": "Computers", "parent_id": null, "children": [], "item_count": 0}
        ])
    );
}

#[tokio::test]
async fn test_get_categories_storage_failure() {
    let store = setup().await;
    store.set_unavailable(true);

    let (status, body) = get(store, "/api/v1/categories/tree").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error: ErrorDetail = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.code.as_deref(), Some("storage_error"));
}

#[tokio::test]
async fn test_liveness() {
    let (status, body) = get(InMemoryStore::new(), "/api").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"Catalog Server API is running!");
}
