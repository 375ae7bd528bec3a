//! Product filtering across catalog names.

use crate::catalog::Product;
use crate::ids::{CategoryId, ShopId};
use crate::state::MarketState;
use serde::{Deserialize, Serialize};

/// Search and narrowing criteria applied to the product list.
///
/// Filtering is pure: it never mutates state, never fails on a dangling
/// shop or category reference, and preserves the input ordering.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductFilter {
    /// Free-text query, matched case-insensitively as a substring of the
    /// product name, the resolved shop name, or the resolved category
    /// name. Empty matches everything.
    pub query: String,
    /// Exact category narrowing, if set.
    pub category_id: Option<CategoryId>,
    /// Exact shop narrowing, if set.
    pub shop_id: Option<ShopId>,
}

impl ProductFilter {
    /// Create a filter that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Narrow to a single category.
    pub fn with_category(mut self, id: CategoryId) -> Self {
        self.category_id = Some(id);
        self
    }

    /// Narrow to a single shop.
    pub fn with_shop(mut self, id: ShopId) -> Self {
        self.shop_id = Some(id);
        self
    }

    /// Check whether a single product passes all three predicates.
    ///
    /// A dangling shop or category reference contributes an empty string
    /// to the text match.
    pub fn matches(&self, product: &Product, state: &MarketState) -> bool {
        let query = self.query.to_lowercase();
        let shop_name = state.shop_name(&product.shop_id).to_lowercase();
        let category_name = state.category_name(&product.category_id).to_lowercase();

        let matches_text = product.name.to_lowercase().contains(&query)
            || shop_name.contains(&query)
            || category_name.contains(&query);
        let matches_category = self
            .category_id
            .as_ref()
            .map_or(true, |id| &product.category_id == id);
        let matches_shop = self.shop_id.as_ref().map_or(true, |id| &product.shop_id == id);

        matches_text && matches_category && matches_shop
    }

    /// Apply the filter over the state's product list, preserving order.
    pub fn apply<'a>(&self, state: &'a MarketState) -> Vec<&'a Product> {
        state
            .products
            .iter()
            .filter(|p| self.matches(p, state))
            .collect()
    }
}
