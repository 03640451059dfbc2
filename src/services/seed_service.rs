use crate::data::repos::traits::store::{Session, Store};
use crate::data::seed::{seed_catalog, SeedSummary};
use crate::services::errors::CatalogServiceError;
use diesel_async::scoped_futures::ScopedFutureExt;

pub struct SeedService<S> {
    store: S,
}

impl<S: Store> SeedService<S> {
    pub fn new(store: S) -> Self {
        SeedService { store }
    }

    /// Seeds the demo catalog in one unit of work. `None` when data was already present.
    pub async fn seed(&self) -> Result<Option<SeedSummary>, CatalogServiceError> {
        self.store
            .unit_of_work(|session| run_seed(session).scope_boxed())
            .await
    }
}

async fn run_seed(session: &mut dyn Session) -> Result<Option<SeedSummary>, CatalogServiceError> {
    Ok(seed_catalog(session).await?)
}
