//! The storefront facade: one owned state container with write-through
//! persistence.
//!
//! Every operation runs to completion synchronously and ends with a full
//! re-serialization of the aggregate it touched. A failed write is logged
//! and swallowed; the in-memory state stays authoritative for the rest of
//! the session.

use crate::auth::AdminGuard;
use crate::cart::Cart;
use crate::catalog::{Category, Product, Shop};
use crate::checkout::{CustomerInfo, Order, OrderStatus};
use crate::error::MarketError;
use crate::ids::{CategoryId, OrderId, ProductId, ShopId};
use crate::search::ProductFilter;
use crate::state::MarketState;
use souq_store::Store;
use tracing::{debug, warn};

/// Deployment constants for a storefront instance.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Store key holding the serialized [`MarketState`].
    pub state_key: String,
    /// Store key holding the serialized cart.
    pub cart_key: String,
    /// Fixed admin secret.
    pub admin_secret: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            state_key: "aqraba_store_data".to_string(),
            cart_key: "aqraba_store_cart".to_string(),
            admin_secret: "ya102030".to_string(),
        }
    }
}

/// The storefront: catalog, cart, orders, and the admin gate, backed by a
/// key-value store.
///
/// # Example
///
/// ```rust,ignore
/// use souq_commerce::prelude::*;
/// use souq_store::MemoryStore;
///
/// let mut shop = Storefront::open_default(MemoryStore::new());
///
/// shop.set_search_query("تفاح");
/// let hits = shop.visible_products();
///
/// shop.add_to_cart(&ProductId::new("p1"))?;
/// let order_id = shop.place_order(&CustomerInfo::new("Lina", "0590000000", "Main St"))?;
/// ```
pub struct Storefront<S: Store> {
    config: StorefrontConfig,
    store: S,
    state: MarketState,
    cart: Cart,
    filter: ProductFilter,
    admin: AdminGuard,
}

impl<S: Store> Storefront<S> {
    /// Load a storefront from the store.
    ///
    /// An absent or unreadable snapshot falls back to the seed dataset; an
    /// absent or unreadable cart falls back to an empty cart. Neither case
    /// is fatal.
    pub fn open(store: S, config: StorefrontConfig) -> Self {
        let state = match store.get::<MarketState>(&config.state_key) {
            Ok(Some(state)) => state,
            Ok(None) => MarketState::seed(),
            Err(err) => {
                warn!(key = %config.state_key, error = %err, "failed to load stored state, using seed dataset");
                MarketState::seed()
            }
        };
        let cart = match store.get::<Cart>(&config.cart_key) {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(err) => {
                warn!(key = %config.cart_key, error = %err, "failed to load stored cart, starting empty");
                Cart::new()
            }
        };
        let admin = AdminGuard::new(config.admin_secret.clone());

        Self {
            config,
            store,
            state,
            cart,
            filter: ProductFilter::new(),
            admin,
        }
    }

    /// Load with the default deployment constants.
    pub fn open_default(store: S) -> Self {
        Self::open(store, StorefrontConfig::default())
    }

    /// The current aggregate.
    pub fn state(&self) -> &MarketState {
        &self.state
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The active search and narrowing criteria.
    pub fn filter(&self) -> &ProductFilter {
        &self.filter
    }

    // --- browsing -----------------------------------------------------

    /// Set the free-text search query.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    /// Narrow to a category, or clear the narrowing with `None`.
    pub fn set_category_filter(&mut self, id: Option<CategoryId>) {
        self.filter.category_id = id;
    }

    /// Narrow to a shop, or clear the narrowing with `None`.
    pub fn set_shop_filter(&mut self, id: Option<ShopId>) {
        self.filter.shop_id = id;
    }

    /// Products passing the current search query and narrowing filters,
    /// in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.filter.apply(&self.state)
    }

    /// Products with an active offer price, for the featured rail.
    pub fn featured_products(&self) -> Vec<&Product> {
        self.state.products.iter().filter(|p| p.is_on_sale()).collect()
    }

    // --- cart ---------------------------------------------------------

    /// Add one unit of a catalog product to the cart.
    ///
    /// The line snapshots the product's current fields, so cart ids always
    /// originate from catalog ids and later catalog edits leave existing
    /// lines untouched.
    pub fn add_to_cart(&mut self, id: &ProductId) -> Result<(), MarketError> {
        let product = self
            .state
            .find_product(id)
            .ok_or_else(|| MarketError::ProductNotFound(id.to_string()))?
            .clone();
        self.cart.add(&product);
        self.commit_cart();
        Ok(())
    }

    /// Remove a cart line. Removing an absent line is a no-op.
    pub fn remove_from_cart(&mut self, id: &ProductId) {
        self.cart.remove(id);
        self.commit_cart();
    }

    /// Adjust a cart line's quantity by `delta` (floored at one unit).
    pub fn update_quantity(&mut self, id: &ProductId, delta: i64) {
        self.cart.update_quantity(id, delta);
        self.commit_cart();
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.commit_cart();
    }

    /// Total payable for the current cart, recomputed on every call.
    pub fn cart_total(&self) -> f64 {
        self.cart.total()
    }

    /// Badge count: sum of cart line quantities.
    pub fn cart_item_count(&self) -> u32 {
        self.cart.item_count()
    }

    // --- checkout -----------------------------------------------------

    /// Convert the cart into a persisted order.
    ///
    /// Validation failure mutates nothing. On success the order lands at
    /// the head of the order list and the cart empties within this one
    /// call, so callers never observe the order without the cleared cart.
    pub fn place_order(&mut self, info: &CustomerInfo) -> Result<OrderId, MarketError> {
        let order = Order::place(info, self.cart.snapshot())?;
        let id = order.id.clone();
        debug!(order = %id, total = order.total, "order placed");

        self.state.record_order(order);
        self.cart.clear();
        self.commit_state();
        self.commit_cart();
        Ok(id)
    }

    // --- admin session ------------------------------------------------

    /// Check the submitted secret and activate admin mode on a match.
    pub fn admin_login(&mut self, submitted: &str) -> bool {
        self.admin.login(submitted)
    }

    /// Leave admin mode.
    pub fn admin_logout(&mut self) {
        self.admin.logout();
    }

    /// Check if an admin session is active.
    pub fn is_admin(&self) -> bool {
        self.admin.is_active()
    }

    // --- catalog mutations --------------------------------------------

    /// Insert a product with a caller-supplied unique id.
    pub fn add_product(&mut self, product: Product) -> Result<(), MarketError> {
        self.state.add_product(product)?;
        self.commit_state();
        Ok(())
    }

    /// Replace the product with the same id.
    pub fn update_product(&mut self, product: Product) -> Result<(), MarketError> {
        self.state.update_product(product)?;
        self.commit_state();
        Ok(())
    }

    /// Remove a product. Returns whether a record was removed.
    pub fn delete_product(&mut self, id: &ProductId) -> bool {
        let removed = self.state.delete_product(id);
        if removed {
            self.commit_state();
        }
        removed
    }

    /// Insert a shop with a caller-supplied unique id.
    pub fn add_shop(&mut self, shop: Shop) -> Result<(), MarketError> {
        self.state.add_shop(shop)?;
        self.commit_state();
        Ok(())
    }

    /// Replace the shop with the same id.
    pub fn update_shop(&mut self, shop: Shop) -> Result<(), MarketError> {
        self.state.update_shop(shop)?;
        self.commit_state();
        Ok(())
    }

    /// Remove a shop. Does not cascade to products.
    pub fn delete_shop(&mut self, id: &ShopId) -> bool {
        let removed = self.state.delete_shop(id);
        if removed {
            self.commit_state();
        }
        removed
    }

    /// Insert a category with a caller-supplied unique id.
    pub fn add_category(&mut self, category: Category) -> Result<(), MarketError> {
        self.state.add_category(category)?;
        self.commit_state();
        Ok(())
    }

    /// Replace the category with the same id.
    pub fn update_category(&mut self, category: Category) -> Result<(), MarketError> {
        self.state.update_category(category)?;
        self.commit_state();
        Ok(())
    }

    /// Remove a category. Does not cascade to products.
    pub fn delete_category(&mut self, id: &CategoryId) -> bool {
        let removed = self.state.delete_category(id);
        if removed {
            self.commit_state();
        }
        removed
    }

    /// Set an order's status. Any of the three statuses may be set at any
    /// time.
    pub fn set_order_status(
        &mut self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<(), MarketError> {
        self.state.set_order_status(id, status)?;
        self.commit_state();
        Ok(())
    }

    // --- persistence --------------------------------------------------

    /// Force a commit of both aggregates, surfacing any store failure.
    ///
    /// Routine operations swallow write failures; call this when the
    /// caller needs to know the backend actually accepted the state
    /// (e.g., before process exit).
    pub fn persist(&self) -> Result<(), MarketError> {
        self.store.set(&self.config.state_key, &self.state)?;
        self.store.set(&self.config.cart_key, &self.cart)?;
        Ok(())
    }

    /// Write-through commit of the aggregate.
    fn commit_state(&self) {
        if let Err(err) = self.store.set(&self.config.state_key, &self.state) {
            warn!(key = %self.config.state_key, error = %err, "failed to persist state");
        }
    }

    /// Write-through commit of the cart.
    fn commit_cart(&self) {
        if let Err(err) = self.store.set(&self.config.cart_key, &self.cart) {
            warn!(key = %self.config.cart_key, error = %err, "failed to persist cart");
        }
    }
}
