//! Catalog and order mutations, each keyed by id.
//!
//! Mutations validate their record and leave the aggregate consistent;
//! persisting the aggregate afterwards is the storefront's job.

use crate::catalog::{Category, Product, Shop};
use crate::checkout::{Order, OrderStatus};
use crate::error::MarketError;
use crate::ids::{CategoryId, OrderId, ProductId, ShopId};
use crate::state::MarketState;

impl MarketState {
    /// Insert a product with a caller-supplied unique id.
    pub fn add_product(&mut self, product: Product) -> Result<(), MarketError> {
        product.validate()?;
        if self.find_product(&product.id).is_some() {
            return Err(MarketError::Validation(format!(
                "duplicate product id: {}",
                product.id
            )));
        }
        self.products.push(product);
        Ok(())
    }

    /// Replace the product with the same id.
    pub fn update_product(&mut self, product: Product) -> Result<(), MarketError> {
        product.validate()?;
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => {
                *slot = product;
                Ok(())
            }
            None => Err(MarketError::ProductNotFound(product.id.to_string())),
        }
    }

    /// Remove a product. Returns whether a record was removed.
    pub fn delete_product(&mut self, id: &ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| &p.id != id);
        self.products.len() < before
    }

    /// Insert a shop with a caller-supplied unique id.
    pub fn add_shop(&mut self, shop: Shop) -> Result<(), MarketError> {
        shop.validate()?;
        if self.find_shop(&shop.id).is_some() {
            return Err(MarketError::Validation(format!(
                "duplicate shop id: {}",
                shop.id
            )));
        }
        self.shops.push(shop);
        Ok(())
    }

    /// Replace the shop with the same id.
    pub fn update_shop(&mut self, shop: Shop) -> Result<(), MarketError> {
        shop.validate()?;
        match self.shops.iter_mut().find(|s| s.id == shop.id) {
            Some(slot) => {
                *slot = shop;
                Ok(())
            }
            None => Err(MarketError::ShopNotFound(shop.id.to_string())),
        }
    }

    /// Remove a shop. Products keep their shop id; the dangling reference
    /// resolves to an empty display name.
    pub fn delete_shop(&mut self, id: &ShopId) -> bool {
        let before = self.shops.len();
        self.shops.retain(|s| &s.id != id);
        self.shops.len() < before
    }

    /// Insert a category with a caller-supplied unique id.
    pub fn add_category(&mut self, category: Category) -> Result<(), MarketError> {
        category.validate()?;
        if self.find_category(&category.id).is_some() {
            return Err(MarketError::Validation(format!(
                "duplicate category id: {}",
                category.id
            )));
        }
        self.categories.push(category);
        Ok(())
    }

    /// Replace the category with the same id.
    pub fn update_category(&mut self, category: Category) -> Result<(), MarketError> {
        category.validate()?;
        match self.categories.iter_mut().find(|c| c.id == category.id) {
            Some(slot) => {
                *slot = category;
                Ok(())
            }
            None => Err(MarketError::CategoryNotFound(category.id.to_string())),
        }
    }

    /// Remove a category. Does not cascade to products.
    pub fn delete_category(&mut self, id: &CategoryId) -> bool {
        let before = self.categories.len();
        self.categories.retain(|c| &c.id != id);
        self.categories.len() < before
    }

    /// Record a placed order. Orders are kept newest-first.
    pub fn record_order(&mut self, order: Order) {
        self.orders.insert(0, order);
    }

    /// Set the status of an order. Any status may be set at any time; the
    /// admin workflow is not a forward-only state machine.
    pub fn set_order_status(
        &mut self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<(), MarketError> {
        match self.orders.iter_mut().find(|o| &o.id == id) {
            Some(order) => {
                order.status = status;
                Ok(())
            }
            None => Err(MarketError::OrderNotFound(id.to_string())),
        }
    }
}
