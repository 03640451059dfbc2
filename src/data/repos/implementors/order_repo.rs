use crate::data::errors::StoreError;
use crate::data::models::order::{NewOrder, Order};
use crate::data::repos::implementors::mysql_session::{missing_after_write, MysqlSession};
use crate::data::repos::traits::repository::Repository;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::RunQueryDsl;

#[async_trait]
impl<'c> Repository<Order> for MysqlSession<'c> {
    async fn get_by_id(&mut self, id: i32) -> Result<Option<Order>, StoreError> {
        use crate::data::models::schema::orders::dsl::{order_id, orders};

        match orders
            .filter(order_id.eq(id))
            .select(Order::as_select())
            .first(self.conn())
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn add(&mut self, item: NewOrder) -> Result<Order, StoreError> {
        use crate::data::models::schema::orders::dsl::orders;

        diesel::insert_into(orders)
            .values(&item)
            .execute(self.conn())
            .await?;

        let id = self.last_insert_id().await?;
        Repository::<Order>::get_by_id(self, id)
            .await?
            .ok_or_else(|| missing_after_write("orders", id))
    }
}
