mod common;

use catalog_server_lib::data::errors::StoreError;
use catalog_server_lib::services::errors::OrderServiceError;
use catalog_server_lib::services::order_service::OrderService;
use common::{add_order, add_product, dec, get_line, get_product, order_with_product};

#[tokio::test]
async fn test_add_line_creates_new_line() {
    let (store, order, product) = order_with_product("3").await;
    let service = OrderService::new(store.clone());

    let line = service
        .add_line_to_order(order.order_id, product.product_id, dec("2"))
        .await
        .expect("Failed to add line");

    assert_eq!(line.order_id, order.order_id);
    assert_eq!(line.product_id, product.product_id);
    assert_eq!(line.quantity, dec("2"));
}

#[tokio::test]
async fn test_add_line_rejects_cumulative_overcommit() {
    let (store, order, product) = order_with_product("3").await;
    let service = OrderService::new(store.clone());

    service
        .add_line_to_order(order.order_id, product.product_id, dec("2"))
        .await
        .expect("Failed to add line");

    let result = service
        .add_line_to_order(order.order_id, product.product_id, dec("2"))
        .await;

    match result {
        Err(OrderServiceError::InsufficientStock {
            available,
            requested,
        }) => {
            assert_eq!(available, dec("3"));
            assert_eq!(requested, dec("4"));
        }
        other => panic!("Expected insufficient stock, got {:?}", other),
    }

    let line = get_line(&store, order.order_id, product.product_id)
        .await
        .expect("Line should still exist");
    assert_eq!(line.quantity, dec("2"));
}

#[tokio::test]
async fn test_add_line_unknown_order() {
    let (store, _order, product) = order_with_product("3").await;
    let service = OrderService::new(store.clone());

    let result = service
        .add_line_to_order(999, product.product_id, dec("1"))
        .await;

    assert!(matches!(result, Err(OrderServiceError::OrderNotFound(999))));
    assert!(get_line(&store, 999, product.product_id).await.is_none());
}

#[tokio::test]
async fn test_add_line_unknown_product() {
    let (store, order, _product) = order_with_product("3").await;
    let service = OrderService::new(store.clone());

    let result = service.add_line_to_order(order.order_id, 999, dec("1")).await;

    assert!(matches!(result, Err(OrderServiceError::ProductNotFound(999))));
    assert!(get_line(&store, order.order_id, 999).await.is_none());
}

#[tokio::test]
async fn test_add_line_order_checked_before_product() {
    let (store, _order, _product) = order_with_product("3").await;
    let service = OrderService::new(store);

    let result = service.add_line_to_order(998, 999, dec("1")).await;

    assert!(matches!(result, Err(OrderServiceError::OrderNotFound(998))));
}

#[tokio::test]
async fn test_add_line_exact_fit_succeeds() {
    let (store, order, product) = order_with_product("5").await;
    let service = OrderService::new(store.clone());

    service
        .add_line_to_order(order.order_id, product.product_id, dec("3"))
        .await
        .expect("Failed to add first quantity");
    let line = service
        .add_line_to_order(order.order_id, product.product_id, dec("2"))
        .await
        .expect("Exact fit should succeed");

    assert_eq!(line.quantity, dec("5"));
}

#[tokio::test]
async fn test_add_line_first_request_over_stock() {
    let (store, order, product) = order_with_product("3").await;
    let service = OrderService::new(store.clone());

    let result = service
        .add_line_to_order(order.order_id, product.product_id, dec("3.5"))
        .await;

    match result {
        Err(OrderServiceError::InsufficientStock {
            available,
            requested,
        }) => {
            assert_eq!(available, dec("3"));
            assert_eq!(requested, dec("3.5"));
        }
        other => panic!("Expected insufficient stock, got {:?}", other),
    }
    assert!(get_line(&store, order.order_id, product.product_id)
        .await
        .is_none());
}

#[tokio::test]
async fn test_add_line_accumulates_into_single_line() {
    let (store, order, product) = order_with_product("10").await;
    let service = OrderService::new(store.clone());

    let first = service
        .add_line_to_order(order.order_id, product.product_id, dec("1.25"))
        .await
        .expect("Failed to add line");
    let second = service
        .add_line_to_order(order.order_id, product.product_id, dec("2.5"))
        .await
        .expect("Failed to merge line");

    assert_eq!(first.order_line_id, second.order_line_id);
    assert_eq!(second.quantity, dec("3.75"));
}

#[tokio::test]
async fn test_add_line_quantity_never_decreases() {
    let (store, order, product) = order_with_product("100").await;
    let service = OrderService::new(store.clone());

    let mut previous = dec("0");
    for step in ["1", "0.5", "7", "0.001", "12"] {
        let line = service
            .add_line_to_order(order.order_id, product.product_id, dec(step))
            .await
            .expect("Failed to add line");
        assert!(line.quantity > previous);
        previous = line.quantity;
    }

    assert_eq!(previous, dec("20.501"));
}

#[tokio::test]
async fn test_add_line_leaves_stock_untouched() {
    let (store, order, product) = order_with_product("3").await;
    let service = OrderService::new(store.clone());

    service
        .add_line_to_order(order.order_id, product.product_id, dec("2"))
        .await
        .expect("Failed to add line");

    let stored = get_product(&store, product.product_id)
        .await
        .expect("Product should exist");
    assert_eq!(stored.quantity, dec("3"));
    assert_eq!(stored.price, product.price);
}

#[tokio::test]
async fn test_add_line_orders_checked_independently() {
    let (store, first_order, product) = order_with_product("3").await;
    let second_order = add_order(&store, None).await;
    let service = OrderService::new(store.clone());

    service
        .add_line_to_order(first_order.order_id, product.product_id, dec("3"))
        .await
        .expect("Failed to add line to first order");
    let line = service
        .add_line_to_order(second_order.order_id, product.product_id, dec("3"))
        .await
        .expect("Stock is checked per order");

    assert_eq!(line.order_id, second_order.order_id);
    assert_eq!(line.quantity, dec("3"));
}

#[tokio::test]
async fn test_add_line_different_products_get_separate_lines() {
    let (store, order, product) = order_with_product("3").await;
    let other = add_product(&store, "LG", "4", "45000", None).await;
    let service = OrderService::new(store.clone());

    let first = service
        .add_line_to_order(order.order_id, product.product_id, dec("1"))
        .await
        .expect("Failed to add first line");
    let second = service
        .add_line_to_order(order.order_id, other.product_id, dec("1"))
        .await
        .expect("Failed to add second line");

    assert_ne!(first.order_line_id, second.order_line_id);
}

#[tokio::test]
async fn test_add_line_propagates_store_failure() {
    let (store, order, product) = order_with_product("3").await;
    let service = OrderService::new(store.clone());

    store.set_unavailable(true);
    let result = service
        .add_line_to_order(order.order_id, product.product_id, dec("1"))
        .await;
    store.set_unavailable(false);

    assert!(matches!(
        result,
        Err(OrderServiceError::Store(StoreError::Unavailable))
    ));
    assert!(get_line(&store, order.order_id, product.product_id)
        .await
        .is_none());
}
