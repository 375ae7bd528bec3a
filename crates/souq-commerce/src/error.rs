//! Market error types.

use souq_store::StoreError;
use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum MarketError {
    /// A required field is missing or a record invariant is broken.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Shop not found.
    #[error("Shop not found: {0}")]
    ShopNotFound(String),

    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Order not found.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Storage read or write failure.
    #[error("Persistence error: {0}")]
    Persistence(#[from] StoreError),

    /// Failed to serialize or deserialize a persisted value.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
