//! Synchronous key-value persistence for souq.
//!
//! Provides a simple, ergonomic API for persisting application state in a
//! key-value backend with automatic JSON serialization.
//!
//! # Example
//!
//! ```rust,ignore
//! use souq_store::{MemoryStore, Store};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Cart {
//!     items: Vec<CartItem>,
//! }
//!
//! let store = MemoryStore::new();
//!
//! // Store a value
//! store.set("souq_cart", &cart)?;
//!
//! // Retrieve a value
//! let cart: Option<Cart> = store.get("souq_cart")?;
//!
//! // Delete a value
//! store.delete("souq_cart")?;
//! ```

mod error;
mod file;
mod kv;

pub use error::StoreError;
pub use file::FileStore;
pub use kv::{MemoryStore, Store};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileStore, MemoryStore, Store, StoreError};
}
