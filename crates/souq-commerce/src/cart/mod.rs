//! Shopping cart module.
//!
//! Contains the cart, its line items, and the shared pricing rule.

mod cart;

pub use cart::{total_of, Cart, CartItem};
