//! Checkout module.
//!
//! Contains orders, the order status lifecycle, and customer details.

mod order;

pub use order::{CustomerInfo, Order, OrderStatus};
