use crate::data::errors::StoreError;
use diesel::sql_types::BigInt;
use diesel_async::{AsyncMysqlConnection, RunQueryDsl};

/// Storage session bound to one transaction-scoped MySQL connection.
pub struct MysqlSession<'c> {
    conn: &'c mut AsyncMysqlConnection,
}

impl<'c> MysqlSession<'c> {
    pub fn new(conn: &'c mut AsyncMysqlConnection) -> Self {
        MysqlSession { conn }
    }

    pub(crate) fn conn(&mut self) -> &mut AsyncMysqlConnection {
        &mut *self.conn
    }

    /// Id generated by the last insert on this connection.
    pub(crate) async fn last_insert_id(&mut self) -> Result<i32, StoreError> {
        let id = diesel::select(diesel::dsl::sql::<BigInt>("CAST(LAST_INSERT_ID() AS SIGNED)"))
            .get_result::<i64>(self.conn())
            .await?;
        i32::try_from(id)
            .map_err(|e| StoreError::Database(diesel::result::Error::DeserializationError(Box::new(e))))
    }
}

/// Maps a read-back miss right after an insert or update to a storage failure.
pub(crate) fn missing_after_write(table: &str, id: i32) -> StoreError {
    tracing::error!("Row {} in {} vanished inside its own transaction", id, table);
    StoreError::Database(diesel::result::Error::NotFound)
}
