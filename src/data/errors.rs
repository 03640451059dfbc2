use thiserror::Error;

/// Failure raised by a storage backend. Services propagate it untouched.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("connection pool error: {0}")]
    Pool(String),
    #[error("constraint violated: {0}")]
    Constraint(String),
    #[error("storage unavailable")]
    Unavailable,
}
