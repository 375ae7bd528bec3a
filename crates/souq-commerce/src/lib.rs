//! Storefront domain types and logic for souq.
//!
//! This crate provides the core of a small local-market storefront:
//!
//! - **Catalog**: products, shops, categories, and their repository
//! - **Cart**: merge-by-id line items with offer-price totals
//! - **Checkout**: delivery orders and the status lifecycle
//! - **Search**: pure multi-field filtering over catalog names
//! - **Storefront**: one owned state container with write-through
//!   persistence to a [`souq_store::Store`] backend
//!
//! All state lives in the process; persistence is a synchronous key-value
//! write after each mutation, with one key for the catalog-plus-orders
//! aggregate and one for the cart. There is no server and no cross-process
//! coordination: two concurrent processes sharing a backend get last-write-
//! wins semantics.
//!
//! # Example
//!
//! ```rust,ignore
//! use souq_commerce::prelude::*;
//! use souq_store::MemoryStore;
//!
//! let mut shop = Storefront::open_default(MemoryStore::new());
//!
//! // Browse
//! shop.set_search_query("تفاح");
//! for product in shop.visible_products() {
//!     println!("{} — {}", product.name, product.effective_price());
//! }
//!
//! // Buy
//! shop.add_to_cart(&ProductId::new("p1"))?;
//! shop.place_order(&CustomerInfo::new("Lina", "0590000000", "Main St"))?;
//! ```

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ids;
pub mod search;
pub mod state;
pub mod storefront;

pub use error::MarketError;
pub use ids::*;
pub use state::MarketState;
pub use storefront::{Storefront, StorefrontConfig};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::MarketError;
    pub use crate::ids::*;
    pub use crate::state::MarketState;

    // Catalog
    pub use crate::catalog::{Category, Product, Shop};

    // Cart
    pub use crate::cart::{Cart, CartItem};

    // Checkout
    pub use crate::checkout::{CustomerInfo, Order, OrderStatus};

    // Search
    pub use crate::search::ProductFilter;

    // Session
    pub use crate::auth::AdminGuard;

    // Facade
    pub use crate::storefront::{Storefront, StorefrontConfig};
}
