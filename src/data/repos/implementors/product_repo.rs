use crate::data::errors::StoreError;
use crate::data::models::product::{NewProduct, Product};
use crate::data::repos::implementors::mysql_session::{missing_after_write, MysqlSession};
use crate::data::repos::traits::catalog_repository::ProductRepository;
use crate::data::repos::traits::repository::Repository;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::RunQueryDsl;

#[async_trait]
impl<'c> Repository<Product> for MysqlSession<'c> {
    async fn get_by_id(&mut self, id: i32) -> Result<Option<Product>, StoreError> {
        use crate::data::models::schema::products::dsl::{product_id, products};

        match products
            .filter(product_id.eq(id))
            .select(Product::as_select())
            .first(self.conn())
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn add(&mut self, item: NewProduct) -> Result<Product, StoreError> {
        use crate::data::models::schema::products::dsl::products;

        diesel::insert_into(products)
            .values(&item)
            .execute(self.conn())
            .await?;

        let id = self.last_insert_id().await?;
        Repository::<Product>::get_by_id(self, id)
            .await?
            .ok_or_else(|| missing_after_write("products", id))
    }
}

#[async_trait]
impl<'c> ProductRepository for MysqlSession<'c> {
    async fn get_all(&mut self) -> Result<Vec<Product>, StoreError> {
        use crate::data::models::schema::products::dsl::{product_id, products};

        let rows = products
            .order_by(product_id.asc())
            .select(Product::as_select())
            .load(self.conn())
            .await?;

        Ok(rows)
    }
}
