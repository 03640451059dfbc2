use crate::data::models::schema::*;
use crate::data::repos::traits::repository::Entity;
use bigdecimal::BigDecimal;
use diesel::prelude::*;

/// Catalog item. `quantity` is the stock on hand and is never touched by order entry.
#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = products)]
#[diesel(primary_key(product_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub quantity: BigDecimal,
    pub price: BigDecimal,
    pub category_id: Option<i32>,
}

#[derive(Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = products)]
pub struct NewProduct {
    pub name: String,
    pub quantity: BigDecimal,
    pub price: BigDecimal,
    pub category_id: Option<i32>,
}

impl Entity for Product {
    type New = NewProduct;
}
