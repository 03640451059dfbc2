use crate::data::models::product::Product;
use crate::data::repos::traits::store::{Session, Store};
use crate::services::errors::CatalogServiceError;
use diesel_async::scoped_futures::ScopedFutureExt;

pub struct ProductService<S> {
    store: S,
}

impl<S: Store> ProductService<S> {
    pub fn new(store: S) -> Self {
        ProductService { store }
    }

    /// Every product, ordered by id.
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogServiceError> {
        self.store
            .unit_of_work(|session| load_products(session).scope_boxed())
            .await
    }
}

async fn load_products(session: &mut dyn Session) -> Result<Vec<Product>, CatalogServiceError> {
    Ok(session.get_all().await?)
}
