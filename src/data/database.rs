use crate::api::config::Config;
use crate::data::errors::StoreError;
use crate::data::repos::implementors::mysql_session::MysqlSession;
use crate::data::repos::traits::store::{Session, Store};
use async_trait::async_trait;
use diesel_async::pooled_connection::deadpool::{Object, Pool};
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::scoped_futures::{ScopedBoxFuture, ScopedFutureExt};
use diesel_async::{AsyncConnection, AsyncMysqlConnection};

/// Explicit handle to the MySQL connection pool. Cheap to clone.
#[derive(Clone)]
pub struct Database {
    pool: Pool<AsyncMysqlConnection>,
}

impl Database {
    /// Builds the pool. No connection is opened until the first unit of work.
    pub fn new(config: &Config) -> Result<Self, StoreError> {
        let manager =
            AsyncDieselConnectionManager::<AsyncMysqlConnection>::new(config.database_url.as_str());
        let pool = Pool::builder(manager)
            .max_size(config.database_pool_size)
            .build()
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        tracing::info!(max_size = config.database_pool_size, "DB connection pool created");

        Ok(Database { pool })
    }

    pub async fn get_connection(&self) -> Result<Object<AsyncMysqlConnection>, StoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))
    }
}

/// Lets diesel roll back on either a query failure or a rejected unit of work.
enum TransactionError<E> {
    Work(E),
    Database(diesel::result::Error),
}

impl<E> From<diesel::result::Error> for TransactionError<E> {
    fn from(e: diesel::result::Error) -> Self {
        TransactionError::Database(e)
    }
}

#[async_trait]
impl Store for Database {
    async fn unit_of_work<'a, T, E, F>(&self, work: F) -> Result<T, E>
    where
        F: for<'s> FnOnce(&'s mut dyn Session) -> ScopedBoxFuture<'a, 's, Result<T, E>>
            + Send
            + 'a,
        T: Send + 'a,
        E: From<StoreError> + Send + 'a,
    {
        let mut conn = self.get_connection().await?;

        conn.transaction::<T, TransactionError<E>, _>(|connection| {
            async move {
                let mut session = MysqlSession::new(connection);
                work(&mut session).await.map_err(TransactionError::Work)
            }
            .scope_boxed()
        })
        .await
        .map_err(|e| match e {
            TransactionError::Work(e) => e,
            TransactionError::Database(e) => E::from(StoreError::Database(e)),
        })
    }
}
