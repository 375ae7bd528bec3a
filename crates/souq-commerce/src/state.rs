//! The persisted aggregate: catalog plus orders.

use crate::catalog::{Category, Product, Shop};
use crate::checkout::Order;
use crate::ids::{CategoryId, OrderId, ProductId, ShopId};
use serde::{Deserialize, Serialize};

/// The entire persisted snapshot: products, shops, categories, and orders.
///
/// Exactly one serialized copy lives under the state key; the cart is
/// persisted separately under its own key. All mutations go through the
/// repository operations in [`crate::catalog`], never ad hoc field writes,
/// so the write-through commit in the storefront stays reliable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketState {
    pub products: Vec<Product>,
    pub shops: Vec<Shop>,
    pub categories: Vec<Category>,
    pub orders: Vec<Order>,
}

impl MarketState {
    /// An empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in dataset used when the store has no snapshot or the stored
    /// snapshot cannot be read.
    pub fn seed() -> Self {
        Self {
            products: vec![
                Product {
                    id: ProductId::new("p1"),
                    name: "تفاح أحمر طازج".to_string(),
                    price: 15.0,
                    offer_price: Some(12.0),
                    unit: "كيلو".to_string(),
                    shop_id: ShopId::new("s1"),
                    category_id: CategoryId::new("c1"),
                    image_url: "https://picsum.photos/seed/apple/400/300".to_string(),
                    description: None,
                },
                Product {
                    id: ProductId::new("p2"),
                    name: "أرز بسمتي فاخر".to_string(),
                    price: 45.0,
                    offer_price: None,
                    unit: "كيس 5 كغم".to_string(),
                    shop_id: ShopId::new("s2"),
                    category_id: CategoryId::new("c2"),
                    image_url: "https://picsum.photos/seed/rice/400/300".to_string(),
                    description: None,
                },
            ],
            shops: vec![
                Shop {
                    id: ShopId::new("s1"),
                    name: "خضروات القدس".to_string(),
                    image_url: "https://picsum.photos/seed/veg/400/300".to_string(),
                },
                Shop {
                    id: ShopId::new("s2"),
                    name: "بقالة الأمانة".to_string(),
                    image_url: "https://picsum.photos/seed/grocery/400/300".to_string(),
                },
            ],
            categories: vec![
                Category {
                    id: CategoryId::new("c1"),
                    name: "خضروات وفواكه".to_string(),
                    image_url: "https://picsum.photos/seed/cat1/400/300".to_string(),
                },
                Category {
                    id: CategoryId::new("c2"),
                    name: "مواد تموينية".to_string(),
                    image_url: "https://picsum.photos/seed/cat2/400/300".to_string(),
                },
            ],
            orders: Vec::new(),
        }
    }

    /// Look up a product by id.
    pub fn find_product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a shop by id.
    pub fn find_shop(&self, id: &ShopId) -> Option<&Shop> {
        self.shops.iter().find(|s| &s.id == id)
    }

    /// Look up a category by id.
    pub fn find_category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Look up an order by id.
    pub fn find_order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// Shop name for display and search; empty for a dangling reference.
    pub fn shop_name(&self, id: &ShopId) -> &str {
        self.find_shop(id).map(|s| s.name.as_str()).unwrap_or("")
    }

    /// Category name for display and search; empty for a dangling reference.
    pub fn category_name(&self, id: &CategoryId) -> &str {
        self.find_category(id).map(|c| c.name.as_str()).unwrap_or("")
    }
}
