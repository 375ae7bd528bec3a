//! Product records and their invariants.

use crate::error::MarketError;
use crate::ids::{CategoryId, ProductId, ShopId};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Prices are plain IEEE-754 doubles, matching the persisted JSON layout.
/// Field names serialize in camelCase so a stored snapshot reads back
/// unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier, supplied by the caller.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Base price; must be positive.
    pub price: f64,
    /// Discounted price; when present it takes precedence over `price`
    /// wherever totals or display prices are computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_price: Option<f64>,
    /// Display unit (e.g., per kilo, per bag).
    pub unit: String,
    /// Shop this product belongs to.
    pub shop_id: ShopId,
    /// Category this product belongs to.
    pub category_id: CategoryId,
    /// URL of the product image.
    pub image_url: String,
    /// Longer description for the product page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Build a validated product record.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        unit: impl Into<String>,
        shop_id: ShopId,
        category_id: CategoryId,
        image_url: impl Into<String>,
    ) -> Result<Self, MarketError> {
        let product = Self {
            id,
            name: name.into(),
            price,
            offer_price: None,
            unit: unit.into(),
            shop_id,
            category_id,
            image_url: image_url.into(),
            description: None,
        };
        product.validate()?;
        Ok(product)
    }

    /// Set a discounted price. Must be positive and below the base price.
    pub fn with_offer_price(mut self, offer_price: f64) -> Result<Self, MarketError> {
        self.offer_price = Some(offer_price);
        self.validate()?;
        Ok(self)
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check the record invariants: non-empty name, positive price, offer
    /// price below the base price.
    pub fn validate(&self) -> Result<(), MarketError> {
        if self.name.trim().is_empty() {
            return Err(MarketError::Validation(
                "product name must not be empty".to_string(),
            ));
        }
        if !(self.price > 0.0) {
            return Err(MarketError::Validation(format!(
                "product price must be positive, got {}",
                self.price
            )));
        }
        if let Some(offer) = self.offer_price {
            if !(offer > 0.0) || offer >= self.price {
                return Err(MarketError::Validation(format!(
                    "offer price {} must be positive and below the base price {}",
                    offer, self.price
                )));
            }
        }
        Ok(())
    }

    /// Price used for totals and display: the offer price when present.
    pub fn effective_price(&self) -> f64 {
        self.offer_price.unwrap_or(self.price)
    }

    /// Check if the product has an active offer price.
    pub fn is_on_sale(&self) -> bool {
        self.offer_price.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product::new(
            ProductId::new("p1"),
            "Fresh apples",
            15.0,
            "kg",
            ShopId::new("s1"),
            CategoryId::new("c1"),
            "https://example.com/apple.jpg",
        )
        .unwrap()
    }

    #[test]
    fn test_product_creation() {
        let p = product();
        assert_eq!(p.name, "Fresh apples");
        assert!(!p.is_on_sale());
        assert_eq!(p.effective_price(), 15.0);
    }

    #[test]
    fn test_offer_price_takes_precedence() {
        let p = product().with_offer_price(12.0).unwrap();
        assert!(p.is_on_sale());
        assert_eq!(p.effective_price(), 12.0);
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Product::new(
            ProductId::new("p1"),
            "   ",
            15.0,
            "kg",
            ShopId::new("s1"),
            CategoryId::new("c1"),
            "",
        );
        assert!(matches!(result, Err(MarketError::Validation(_))));
    }

    #[test]
    fn test_non_positive_price_rejected() {
        for price in [0.0, -3.5] {
            let result = Product::new(
                ProductId::new("p1"),
                "Apples",
                price,
                "kg",
                ShopId::new("s1"),
                CategoryId::new("c1"),
                "",
            );
            assert!(matches!(result, Err(MarketError::Validation(_))));
        }
    }

    #[test]
    fn test_offer_price_must_undercut_base_price() {
        assert!(product().with_offer_price(15.0).is_err());
        assert!(product().with_offer_price(20.0).is_err());
        assert!(product().with_offer_price(0.0).is_err());
        assert!(product().with_offer_price(14.99).is_ok());
    }

    #[test]
    fn test_serialized_field_names() {
        let p = product().with_offer_price(12.0).unwrap();
        let json = serde_json::to_value(&p).unwrap();

        assert_eq!(json["offerPrice"], 12.0);
        assert_eq!(json["shopId"], "s1");
        assert_eq!(json["categoryId"], "c1");
        assert!(json.get("imageUrl").is_some());
    }

    #[test]
    fn test_absent_offer_price_is_omitted() {
        let json = serde_json::to_value(product()).unwrap();
        assert!(json.get("offerPrice").is_none());
        assert!(json.get("description").is_none());
    }
}
