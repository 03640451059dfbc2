use crate::data::models::customer::Customer;
use crate::data::models::schema::*;
use crate::data::repos::traits::repository::Entity;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = orders)]
#[diesel(primary_key(order_id))]
#[diesel(belongs_to(Customer, foreign_key = customer_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Order {
    pub order_id: i32,
    pub customer_id: Option<i32>,
    pub created_at: chrono::NaiveDateTime,
}

/// `created_at` is filled in by the store.
#[derive(Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = orders)]
pub struct NewOrder {
    pub customer_id: Option<i32>,
}

impl Entity for Order {
    type New = NewOrder;
}
