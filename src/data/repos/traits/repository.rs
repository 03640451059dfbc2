use crate::data::errors::StoreError;
use async_trait::async_trait;

/// A persisted row type together with the form used to insert it.
pub trait Entity: Send + Sized {
    type New: Send;
}

/// Lookup and insert by primary key, implemented once per entity by each backend.
#[async_trait]
pub trait Repository<T: Entity>: Send {
    async fn get_by_id(&mut self, id: i32) -> Result<Option<T>, StoreError>;

    /// Inserts `item` and returns the row as persisted (with its generated id).
    async fn add(&mut self, item: T::New) -> Result<T, StoreError>;
}
