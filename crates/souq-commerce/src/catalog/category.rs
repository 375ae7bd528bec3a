//! Category records.

use crate::error::MarketError;
use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category identifier, supplied by the caller.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
    /// URL of the category image.
    pub image_url: String,
}

impl Category {
    /// Build a validated category record.
    pub fn new(
        id: CategoryId,
        name: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Result<Self, MarketError> {
        let category = Self {
            id,
            name: name.into(),
            image_url: image_url.into(),
        };
        category.validate()?;
        Ok(category)
    }

    /// Check the record invariants.
    pub fn validate(&self) -> Result<(), MarketError> {
        if self.name.trim().is_empty() {
            return Err(MarketError::Validation(
                "category name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
