use crate::data::errors::StoreError;
use bigdecimal::BigDecimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum OrderServiceError {
    #[error("Order with ID {0} not found")]
    OrderNotFound(i32),
    #[error("Product with ID {0} not found")]
    ProductNotFound(i32),
    /// `requested` is the cumulative quantity the order would hold, not the increment.
    #[error("Insufficient stock: available {available}, requested {requested}")]
    InsufficientStock {
        available: BigDecimal,
        requested: BigDecimal,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
}
