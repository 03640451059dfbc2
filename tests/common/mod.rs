#![allow(dead_code)]

use bigdecimal::BigDecimal;
use catalog_server_lib::data::errors::StoreError;
use catalog_server_lib::data::models::category::{Category, NewCategory};
use catalog_server_lib::data::models::customer::{Customer, NewCustomer};
use catalog_server_lib::data::models::order::{NewOrder, Order};
use catalog_server_lib::data::models::order_line::OrderLine;
use catalog_server_lib::data::models::product::{NewProduct, Product};
use catalog_server_lib::data::repos::implementors::memory_store::InMemoryStore;
use catalog_server_lib::data::repos::traits::repository::Repository;
use catalog_server_lib::data::repos::traits::store::Store;
use diesel_async::scoped_futures::ScopedFutureExt;
use std::str::FromStr;

pub fn dec(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).expect("Invalid decimal literal")
}

pub async fn add_category(store: &InMemoryStore, name: &str, parent_id: Option<i32>) -> Category {
    let new_category = NewCategory {
        name: name.to_string(),
        parent_id,
    };
    store
        .unit_of_work(move |session| {
            async move { Repository::<Category>::add(session, new_category).await }.scope_boxed()
        })
        .await
        .expect("Failed to add category")
}

pub async fn add_product(
    store: &InMemoryStore,
    name: &str,
    quantity: &str,
    price: &str,
    category_id: Option<i32>,
) -> Product {
    let new_product = NewProduct {
        name: name.to_string(),
        quantity: dec(quantity),
        price: dec(price),
        category_id,
    };
    store
        .unit_of_work(move |session| {
            async move { Repository::<Product>::add(session, new_product).await }.scope_boxed()
        })
        .await
        .expect("Failed to add product")
}

pub async fn add_customer(store: &InMemoryStore, name: &str) -> Customer {
    let new_customer = NewCustomer {
        name: name.to_string(),
        address: "Test address".to_string(),
    };
    store
        .unit_of_work(move |session| {
            async move { Repository::<Customer>::add(session, new_customer).await }.scope_boxed()
        })
        .await
        .expect("Failed to add customer")
}

pub async fn add_order(store: &InMemoryStore, customer_id: Option<i32>) -> Order {
    store
        .unit_of_work(move |session| {
            async move { Repository::<Order>::add(session, NewOrder { customer_id }).await }
                .scope_boxed()
        })
        .await
        .expect("Failed to add order")
}

pub async fn get_product(store: &InMemoryStore, product_id: i32) -> Option<Product> {
    store
        .unit_of_work(move |session| {
            async move { Repository::<Product>::get_by_id(session, product_id).await }
                .scope_boxed()
        })
        .await
        .expect("Failed to read product")
}

pub async fn get_line(store: &InMemoryStore, order_id: i32, product_id: i32) -> Option<OrderLine> {
    store
        .unit_of_work(move |session| {
            async move { session.get_by_order_and_product(order_id, product_id).await }
                .scope_boxed()
        })
        .await
        .expect("Failed to read order line")
}

pub async fn count_lines(store: &InMemoryStore, order_id: i32, product_ids: &[i32]) -> usize {
    let mut count = 0;
    for &product_id in product_ids {
        if get_line(store, order_id, product_id).await.is_some() {
            count += 1;
        }
    }
    count
}

/// A store holding one order and one product with the given stock.
pub async fn order_with_product(stock: &str) -> (InMemoryStore, Order, Product) {
    let store = InMemoryStore::new();
    let category = add_category(&store, "Refrigerators", None).await;
    let product = add_product(&store, "Atlant", stock, "18000", Some(category.category_id)).await;
    let customer = add_customer(&store, "Horns & Hooves LLC").await;
    let order = add_order(&store, Some(customer.customer_id)).await;
    (store, order, product)
}

pub fn assert_store_error(err: &StoreError) {
    assert!(
        matches!(err, StoreError::Unavailable),
        "Expected an unavailable store, got {:?}",
        err
    );
}
