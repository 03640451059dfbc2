use crate::data::errors::StoreError;
use crate::data::models::category::{Category, NewCategory};
use crate::data::repos::implementors::mysql_session::{missing_after_write, MysqlSession};
use crate::data::repos::traits::catalog_repository::CategoryRepository;
use crate::data::repos::traits::repository::Repository;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::RunQueryDsl;
use std::collections::HashMap;

#[async_trait]
impl<'c> Repository<Category> for MysqlSession<'c> {
    async fn get_by_id(&mut self, id: i32) -> Result<Option<Category>, StoreError> {
        use crate::data::models::schema::categories::dsl::{categories, category_id};

        match categories
            .filter(category_id.eq(id))
            .select(Category::as_select())
            .first(self.conn())
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn add(&mut self, item: NewCategory) -> Result<Category, StoreError> {
        use crate::data::models::schema::categories::dsl::categories;

        diesel::insert_into(categories)
            .values(&item)
            .execute(self.conn())
            .await?;

        let id = self.last_insert_id().await?;
        Repository::<Category>::get_by_id(self, id)
            .await?
            .ok_or_else(|| missing_after_write("categories", id))
    }
}

#[async_trait]
impl<'c> CategoryRepository for MysqlSession<'c> {
    async fn get_all_flat(&mut self) -> Result<Vec<Category>, StoreError> {
        use crate::data::models::schema::categories::dsl::{categories, category_id, name, parent_id};

        // MySQL sorts NULL first on ascending order, so roots lead the list.
        let rows = categories
            .order_by((parent_id.asc(), name.asc(), category_id.asc()))
            .select(Category::as_select())
            .load(self.conn())
            .await?;

        Ok(rows)
    }

    async fn count_products_by_category(&mut self) -> Result<HashMap<i32, i64>, StoreError> {
        use crate::data::models::schema::products::dsl::{category_id, product_id, products};
        use diesel::dsl::count;

        let rows: Vec<(Option<i32>, i64)> = products
            .filter(category_id.is_not_null())
            .group_by(category_id)
            .select((category_id, count(product_id)))
            .load(self.conn())
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(id, n)| id.map(|id| (id, n)))
            .collect())
    }
}
