use crate::data::models::schema::*;
use crate::data::repos::traits::repository::Entity;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = customers)]
#[diesel(primary_key(customer_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Customer {
    pub customer_id: i32,
    pub name: String,
    pub address: String,
}

#[derive(Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = customers)]
pub struct NewCustomer {
    pub name: String,
    pub address: String,
}

impl Entity for Customer {
    type New = NewCustomer;
}
