use crate::data::models::order::Order;
use crate::data::models::product::Product;
use crate::data::models::schema::*;
use crate::data::repos::traits::repository::Entity;
use bigdecimal::BigDecimal;
use diesel::prelude::*;

/// One product on one order. `(order_id, product_id)` is unique.
#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = order_lines)]
#[diesel(primary_key(order_line_id))]
#[diesel(belongs_to(Order, foreign_key = order_id))]
#[diesel(belongs_to(Product, foreign_key = product_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct OrderLine {
    pub order_line_id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: BigDecimal,
}

#[derive(Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = order_lines)]
pub struct NewOrderLine {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: BigDecimal,
}

impl Entity for OrderLine {
    type New = NewOrderLine;
}
