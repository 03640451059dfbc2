use crate::data::errors::StoreError;
use crate::data::models::order_line::{NewOrderLine, OrderLine};
use crate::data::repos::implementors::mysql_session::{missing_after_write, MysqlSession};
use crate::data::repos::traits::catalog_repository::OrderLineRepository;
use crate::data::repos::traits::repository::Repository;
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use diesel::prelude::*;
use diesel::result;
use diesel_async::RunQueryDsl;

#[async_trait]
impl<'c> Repository<OrderLine> for MysqlSession<'c> {
    async fn get_by_id(&mut self, id: i32) -> Result<Option<OrderLine>, StoreError> {
        use crate::data::models::schema::order_lines::dsl::{order_line_id, order_lines};

        match order_lines
            .filter(order_line_id.eq(id))
            .select(OrderLine::as_select())
            .first(self.conn())
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn add(&mut self, item: NewOrderLine) -> Result<OrderLine, StoreError> {
        use crate::data::models::schema::order_lines::dsl::order_lines;

        diesel::insert_into(order_lines)
            .values(&item)
            .execute(self.conn())
            .await?;

        let id = self.last_insert_id().await?;
        Repository::<OrderLine>::get_by_id(self, id)
            .await?
            .ok_or_else(|| missing_after_write("order_lines", id))
    }
}

#[async_trait]
impl<'c> OrderLineRepository for MysqlSession<'c> {
    async fn get_by_order_and_product(
        &mut self,
        order_id_query: i32,
        product_id_query: i32,
    ) -> Result<Option<OrderLine>, StoreError> {
        use crate::data::models::schema::order_lines::dsl::{order_id, order_lines, product_id};

        match order_lines
            .filter(order_id.eq(order_id_query))
            .filter(product_id.eq(product_id_query))
            .select(OrderLine::as_select())
            .first(self.conn())
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn update_quantity(
        &mut self,
        id: i32,
        new_quantity: BigDecimal,
    ) -> Result<OrderLine, StoreError> {
        use crate::data::models::schema::order_lines::dsl::{order_line_id, order_lines, quantity};

        diesel::update(order_lines.filter(order_line_id.eq(id)))
            .set(quantity.eq(new_quantity))
            .execute(self.conn())
            .await?;

        Repository::<OrderLine>::get_by_id(self, id)
            .await?
            .ok_or_else(|| missing_after_write("order_lines", id))
    }
}
