use crate::data::errors::StoreError;
use crate::data::models::customer::{Customer, NewCustomer};
use crate::data::repos::implementors::mysql_session::{missing_after_write, MysqlSession};
use crate::data::repos::traits::repository::Repository;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::RunQueryDsl;

#[async_trait]
impl<'c> Repository<Customer> for MysqlSession<'c> {
    async fn get_by_id(&mut self, id: i32) -> Result<Option<Customer>, StoreError> {
        use crate::data::models::schema::customers::dsl::{customer_id, customers};

        match customers
            .filter(customer_id.eq(id))
            .select(Customer::as_select())
            .first(self.conn())
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn add(&mut self, item: NewCustomer) -> Result<Customer, StoreError> {
        use crate::data::models::schema::customers::dsl::customers;

        diesel::insert_into(customers)
            .values(&item)
            .execute(self.conn())
            .await?;

        let id = self.last_insert_id().await?;
        Repository::<Customer>::get_by_id(self, id)
            .await?
            .ok_or_else(|| missing_after_write("customers", id))
    }
}
