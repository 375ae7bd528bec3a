//! Shop records.

use crate::error::MarketError;
use crate::ids::ShopId;
use serde::{Deserialize, Serialize};

/// A shop whose products appear in the catalog.
///
/// Products reference shops by id; deleting a shop does not cascade, and a
/// dangling reference resolves to an empty display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    /// Unique shop identifier, supplied by the caller.
    pub id: ShopId,
    /// Shop name.
    pub name: String,
    /// URL of the shop image.
    pub image_url: String,
}

impl Shop {
    /// Build a validated shop record.
    pub fn new(
        id: ShopId,
        name: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Result<Self, MarketError> {
        let shop = Self {
            id,
            name: name.into(),
            image_url: image_url.into(),
        };
        shop.validate()?;
        Ok(shop)
    }

    /// Check the record invariants.
    pub fn validate(&self) -> Result<(), MarketError> {
        if self.name.trim().is_empty() {
            return Err(MarketError::Validation(
                "shop name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
