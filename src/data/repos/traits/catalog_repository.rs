use crate::data::errors::StoreError;
use crate::data::models::category::Category;
use crate::data::models::order_line::OrderLine;
use crate::data::models::product::Product;
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use std::collections::HashMap;

#[async_trait]
pub trait CategoryRepository: Send {
    /// All categories, parents-less first, then by name in store collation.
    async fn get_all_flat(&mut self) -> Result<Vec<Category>, StoreError>;

    /// Number of products filed directly under each category, in one grouped query.
    /// Categories without products are absent from the map.
    async fn count_products_by_category(&mut self) -> Result<HashMap<i32, i64>, StoreError>;
}

#[async_trait]
pub trait ProductRepository: Send {
    /// All products ordered by id.
    async fn get_all(&mut self) -> Result<Vec<Product>, StoreError>;
}

#[async_trait]
pub trait OrderLineRepository: Send {
    async fn get_by_order_and_product(
        &mut self,
        order_id: i32,
        product_id: i32,
    ) -> Result<Option<OrderLine>, StoreError>;

    /// Overwrites the quantity of an existing line and returns the persisted row.
    async fn update_quantity(
        &mut self,
        order_line_id: i32,
        quantity: BigDecimal,
    ) -> Result<OrderLine, StoreError>;
}
