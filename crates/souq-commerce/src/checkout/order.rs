//! Order types.

use crate::cart::{total_of, CartItem};
use crate::error::MarketError;
use crate::ids::OrderId;
use serde::{Deserialize, Serialize};

/// Order lifecycle status.
///
/// The admin dashboard may set any status at any time; transitions are
/// deliberately unrestricted rather than a forward-only state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed, awaiting processing.
    #[default]
    New,
    /// Order being prepared.
    Processing,
    /// Order delivered and closed.
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
        }
    }

    /// Label shown to customers and admins. The deployment is Arabic-only.
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::New => "جديد",
            OrderStatus::Processing => "قيد التجهيز",
            OrderStatus::Completed => "مكتمل",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "new" => Some(OrderStatus::New),
            "processing" => Some(OrderStatus::Processing),
            "completed" => Some(OrderStatus::Completed),
            _ => None,
        }
    }
}

/// Customer contact details collected at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl CustomerInfo {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }

    /// All three fields are required; whitespace-only values are rejected.
    pub fn validate(&self) -> Result<(), MarketError> {
        for (field, value) in [
            ("name", &self.name),
            ("phone", &self.phone),
            ("address", &self.address),
        ] {
            if value.trim().is_empty() {
                return Err(MarketError::Validation(format!(
                    "customer {field} must not be empty"
                )));
            }
        }
        Ok(())
    }
}

/// A delivery order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order identifier, generated at checkout.
    pub id: OrderId,
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    /// Cart snapshot at checkout time; immutable afterwards.
    pub items: Vec<CartItem>,
    /// Computed once at checkout with the cart pricing rule; never
    /// recomputed from the catalog.
    pub total: f64,
    /// Human-readable placement time.
    pub date: String,
    pub status: OrderStatus,
}

impl Order {
    /// Build an order from a cart snapshot and customer details.
    ///
    /// Validation failure leaves no trace: no id is consumed and nothing
    /// is mutated.
    pub fn place(info: &CustomerInfo, items: Vec<CartItem>) -> Result<Self, MarketError> {
        info.validate()?;
        let total = total_of(&items);
        Ok(Self {
            id: OrderId::generate(),
            customer_name: info.name.clone(),
            phone: info.phone.clone(),
            address: info.address.clone(),
            items,
            total,
            date: chrono::Local::now().format("%d/%m/%Y, %H:%M:%S").to_string(),
            status: OrderStatus::New,
        })
    }

    /// Sum of line quantities.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::ids::{CategoryId, ProductId, ShopId};

    fn line(id: &str, price: f64, offer_price: Option<f64>, quantity: u32) -> CartItem {
        let product = Product::new(
            ProductId::new(id),
            format!("Product {id}"),
            price,
            "kg",
            ShopId::new("s1"),
            CategoryId::new("c1"),
            "",
        )
        .unwrap();
        let product = match offer_price {
            Some(offer) => product.with_offer_price(offer).unwrap(),
            None => product,
        };
        CartItem { product, quantity }
    }

    #[test]
    fn test_place_computes_total_from_snapshot() {
        let info = CustomerInfo::new("Lina", "0590000000", "Main St");
        let order = Order::place(
            &info,
            vec![line("p1", 15.0, Some(12.0), 2), line("p2", 45.0, None, 1)],
        )
        .unwrap();

        assert_eq!(order.total, 69.0);
        assert_eq!(order.status, OrderStatus::New);
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.customer_name, "Lina");
    }

    #[test]
    fn test_blank_fields_rejected() {
        for info in [
            CustomerInfo::new("", "0590000000", "Main St"),
            CustomerInfo::new("Lina", "   ", "Main St"),
            CustomerInfo::new("Lina", "0590000000", ""),
        ] {
            let result = Order::place(&info, Vec::new());
            assert!(matches!(result, Err(MarketError::Validation(_))));
        }
    }

    #[test]
    fn test_order_total_ignores_later_price_changes() {
        let info = CustomerInfo::new("Lina", "0590000000", "Main St");
        let mut snapshot = vec![line("p1", 15.0, Some(12.0), 2)];
        let order = Order::place(&info, snapshot.clone()).unwrap();

        // A later catalog edit would touch the catalog record, not the
        // order's snapshot.
        snapshot[0].product.price = 99.0;
        assert_eq!(order.total, 24.0);
        assert_eq!(order.items[0].product.price, 15.0);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(OrderStatus::New.display_name(), "جديد");
        assert_eq!(OrderStatus::Processing.display_name(), "قيد التجهيز");
        assert_eq!(OrderStatus::Completed.display_name(), "مكتمل");
        assert_eq!(OrderStatus::from_str("PROCESSING"), Some(OrderStatus::Processing));
        assert_eq!(OrderStatus::from_str("shipped"), None);
    }
}
