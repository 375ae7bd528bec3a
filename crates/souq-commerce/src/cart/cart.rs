//! Shopping cart and line items.

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A cart line: a product snapshot plus a quantity.
///
/// The snapshot is taken when the product is added; later catalog edits do
/// not change existing lines. Serializes as the product's fields with a
/// `quantity` alongside, so the persisted cart is a plain array of
/// product-shaped objects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    /// Units of this product; always at least one.
    pub quantity: u32,
}

impl CartItem {
    /// Line subtotal: effective unit price times quantity.
    pub fn line_total(&self) -> f64 {
        self.product.effective_price() * f64::from(self.quantity)
    }
}

/// The shopping cart: an ordered list with at most one line per product id.
///
/// The cart itself is persistence-agnostic; the storefront commits it after
/// every mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`.
    ///
    /// An existing line with the same id has its quantity incremented;
    /// otherwise a new line with a full snapshot of the product appends at
    /// the end. Existing line order is preserved.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
            return;
        }
        self.items.push(CartItem {
            product: product.clone(),
            quantity: 1,
        });
    }

    /// Remove the line with `id`. Removing an absent line is a no-op.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| &i.product.id != id);
        self.items.len() < before
    }

    /// Adjust a line's quantity by `delta`, never dropping below one.
    ///
    /// Lines leave the cart only through [`Cart::remove`]. Returns whether
    /// a line with `id` was present.
    pub fn update_quantity(&mut self, id: &ProductId, delta: i64) -> bool {
        match self.items.iter_mut().find(|i| &i.product.id == id) {
            Some(line) => {
                let next = i64::from(line.quantity).saturating_add(delta).max(1);
                line.quantity = u32::try_from(next).unwrap_or(u32::MAX);
                true
            }
            None => false,
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total payable: the sum of line totals, using the offer price where
    /// one exists. Recomputed on every call, never cached.
    pub fn total(&self) -> f64 {
        total_of(&self.items)
    }

    /// Sum of line quantities.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The lines, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Copy of the lines, for an order snapshot.
    pub fn snapshot(&self) -> Vec<CartItem> {
        self.items.clone()
    }
}

/// Pricing rule shared with checkout: Σ effective price × quantity.
pub fn total_of(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::line_total).sum()
}
