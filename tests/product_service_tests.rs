mod common;

use catalog_server_lib::data::errors::StoreError;
use catalog_server_lib::data::repos::implementors::memory_store::InMemoryStore;
use catalog_server_lib::services::errors::CatalogServiceError;
use catalog_server_lib::services::product_service::ProductService;
use common::{add_category, add_product, dec};

#[tokio::test]
async fn test_list_products_ordered_by_id() {
    let store = InMemoryStore::new();
    let category = add_category(&store, "Laptops", None).await;
    let asus = add_product(&store, "ASUS", "2", "65000", Some(category.category_id)).await;
    let dell = add_product(&store, "Dell", "3", "72000.50", None).await;

    let products = ProductService::new(store)
        .list_products()
        .await
        .expect("Failed to list products");

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].product_id, asus.product_id);
    assert_eq!(products[0].category_id, Some(category.category_id));
    assert_eq!(products[1].product_id, dell.product_id);
    assert_eq!(products[1].price, dec("72000.50"));
    assert_eq!(products[1].category_id, None);
}

#[tokio::test]
async fn test_list_products_empty() {
    let products = ProductService::new(InMemoryStore::new())
        .list_products()
        .await
        .expect("Failed to list products");

    assert!(products.is_empty());
}

#[tokio::test]
async fn test_list_products_propagates_store_failure() {
    let store = InMemoryStore::new();
    store.set_unavailable(true);

    let result = ProductService::new(store).list_products().await;

    assert!(matches!(
        result,
        Err(CatalogServiceError::Store(StoreError::Unavailable))
    ));
}
