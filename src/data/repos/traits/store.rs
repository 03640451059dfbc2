use crate::data::errors::StoreError;
use crate::data::models::category::Category;
use crate::data::models::customer::Customer;
use crate::data::models::order::Order;
use crate::data::models::order_line::OrderLine;
use crate::data::models::product::Product;
use crate::data::repos::traits::catalog_repository::{
    CategoryRepository, OrderLineRepository, ProductRepository,
};
use crate::data::repos::traits::repository::Repository;
use async_trait::async_trait;
use diesel_async::scoped_futures::ScopedBoxFuture;

/// Every storage capability available inside one unit of work.
pub trait Session:
    Repository<Category>
    + Repository<Product>
    + Repository<Customer>
    + Repository<Order>
    + Repository<OrderLine>
    + CategoryRepository
    + ProductRepository
    + OrderLineRepository
    + Send
{
}

impl<T> Session for T where
    T: Repository<Category>
        + Repository<Product>
        + Repository<Customer>
        + Repository<Order>
        + Repository<OrderLine>
        + CategoryRepository
        + ProductRepository
        + OrderLineRepository
        + Send
{
}

/// Handle to a storage backend, cloned into every service and into the router state.
#[async_trait]
pub trait Store: Clone + Send + Sync + 'static {
    /// Runs `work` against a fresh session. Writes are committed when `work` returns `Ok`
    /// and discarded when it returns `Err`.
    async fn unit_of_work<'a, T, E, F>(&self, work: F) -> Result<T, E>
    where
        F: for<'s> FnOnce(&'s mut dyn Session) -> ScopedBoxFuture<'a, 's, Result<T, E>>
            + Send
            + 'a,
        T: Send + 'a,
        E: From<StoreError> + Send + 'a;
}
