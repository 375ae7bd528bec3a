//! End-to-end storefront flows over a real store backend.

use souq_commerce::prelude::*;
use souq_store::{MemoryStore, Store, StoreError};

/// Store double whose writes always fail, as a full backend would.
struct FailingStore;

impl Store for FailingStore {
    fn get_raw(&self, _key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(None)
    }

    fn set_raw(&self, _key: &str, _value: &[u8]) -> Result<(), StoreError> {
        Err(StoreError::Backend("quota exceeded".to_string()))
    }

    fn delete(&self, _key: &str) -> Result<(), StoreError> {
        Ok(())
    }
}

fn customer() -> CustomerInfo {
    CustomerInfo::new("Lina", "0590000000", "Main St 5")
}

#[test]
fn opens_with_seed_dataset_when_store_is_empty() {
    let shop = Storefront::open_default(MemoryStore::new());

    assert_eq!(shop.state().products.len(), 2);
    assert!(shop.cart().is_empty());
    assert!(!shop.is_admin());
}

#[test]
fn opens_with_seed_dataset_when_stored_state_is_corrupted() {
    let store = MemoryStore::new();
    store.set_raw("aqraba_store_data", b"{ not json").unwrap();
    store.set_raw("aqraba_store_cart", b"[broken").unwrap();

    let shop = Storefront::open_default(store);
    assert_eq!(shop.state().products.len(), 2);
    assert!(shop.cart().is_empty());
}

#[test]
fn cart_mutations_write_through_to_the_store() {
    let store = MemoryStore::new();
    let mut shop = Storefront::open_default(store.clone());

    shop.add_to_cart(&ProductId::new("p1")).unwrap();
    shop.add_to_cart(&ProductId::new("p1")).unwrap();

    let persisted: Option<Cart> = store.get("aqraba_store_cart").unwrap();
    let persisted = persisted.unwrap();
    assert_eq!(persisted.unique_item_count(), 1);
    assert_eq!(persisted.item_count(), 2);
}

#[test]
fn cart_total_uses_offer_prices() {
    let mut shop = Storefront::open_default(MemoryStore::new());

    // Seed: p1 is 15 with offer 12, p2 is 45 without an offer.
    shop.add_to_cart(&ProductId::new("p1")).unwrap();
    shop.update_quantity(&ProductId::new("p1"), 1);
    shop.add_to_cart(&ProductId::new("p2")).unwrap();

    assert_eq!(shop.cart_total(), 69.0);
    assert_eq!(shop.cart_item_count(), 3);
}

#[test]
fn adding_unknown_product_is_rejected() {
    let mut shop = Storefront::open_default(MemoryStore::new());
    let result = shop.add_to_cart(&ProductId::new("ghost"));
    assert!(matches!(result, Err(MarketError::ProductNotFound(_))));
    assert!(shop.cart().is_empty());
}

#[test]
fn placing_an_order_clears_the_cart_and_persists_both() {
    let store = MemoryStore::new();
    let mut shop = Storefront::open_default(store.clone());

    shop.add_to_cart(&ProductId::new("p1")).unwrap();
    let order_id = shop.place_order(&customer()).unwrap();

    assert!(shop.cart().is_empty());
    assert_eq!(shop.state().orders.len(), 1);
    assert_eq!(shop.state().orders[0].id, order_id);
    assert_eq!(shop.state().orders[0].status, OrderStatus::New);

    // A fresh storefront over the same backend sees the same picture.
    let reopened = Storefront::open_default(store);
    assert_eq!(reopened.state().orders.len(), 1);
    assert!(reopened.cart().is_empty());
}

#[test]
fn rejected_checkout_leaves_cart_and_orders_untouched() {
    let store = MemoryStore::new();
    let mut shop = Storefront::open_default(store.clone());

    shop.add_to_cart(&ProductId::new("p1")).unwrap();
    let result = shop.place_order(&CustomerInfo::new("", "0590000000", "Main St"));

    assert!(matches!(result, Err(MarketError::Validation(_))));
    assert!(!shop.cart().is_empty());
    assert!(shop.state().orders.is_empty());

    let persisted: Option<Cart> = store.get("aqraba_store_cart").unwrap();
    assert_eq!(persisted.unwrap().item_count(), 1);
}

#[test]
fn orders_are_newest_first_with_increasing_ids() {
    let mut shop = Storefront::open_default(MemoryStore::new());

    shop.add_to_cart(&ProductId::new("p1")).unwrap();
    let first = shop.place_order(&customer()).unwrap();
    shop.add_to_cart(&ProductId::new("p2")).unwrap();
    let second = shop.place_order(&customer()).unwrap();

    assert!(first.as_str() < second.as_str());
    assert_eq!(shop.state().orders[0].id, second);
    assert_eq!(shop.state().orders[1].id, first);
}

#[test]
fn order_total_is_immune_to_later_catalog_edits() {
    let mut shop = Storefront::open_default(MemoryStore::new());

    shop.add_to_cart(&ProductId::new("p1")).unwrap();
    let order_id = shop.place_order(&customer()).unwrap();
    let total_at_checkout = shop.state().orders[0].total;
    assert_eq!(total_at_checkout, 12.0);

    let mut edited = shop.state().find_product(&ProductId::new("p1")).unwrap().clone();
    edited.price = 99.0;
    edited.offer_price = None;
    shop.update_product(edited).unwrap();

    let order = shop.state().find_order(&order_id).unwrap();
    assert_eq!(order.total, total_at_checkout);
    assert_eq!(order.items[0].product.offer_price, Some(12.0));
}

#[test]
fn failed_writes_are_swallowed_and_memory_stays_authoritative() {
    let mut shop = Storefront::open_default(FailingStore);

    shop.add_to_cart(&ProductId::new("p1")).unwrap();
    assert_eq!(shop.cart_item_count(), 1);

    let order_id = shop.place_order(&customer()).unwrap();
    assert_eq!(shop.state().orders[0].id, order_id);
    assert!(shop.cart().is_empty());
}

#[test]
fn explicit_persist_surfaces_store_failures() {
    let shop = Storefront::open_default(FailingStore);
    assert!(matches!(shop.persist(), Err(MarketError::Persistence(_))));

    let shop = Storefront::open_default(MemoryStore::new());
    shop.persist().unwrap();
}

#[test]
fn admin_login_gate() {
    let mut shop = Storefront::open_default(MemoryStore::new());

    assert!(!shop.admin_login("wrong"));
    assert!(!shop.is_admin());

    assert!(shop.admin_login("ya102030"));
    assert!(shop.is_admin());

    shop.admin_logout();
    assert!(!shop.is_admin());
}

#[test]
fn admin_manages_catalog_and_order_status() {
    let store = MemoryStore::new();
    let mut shop = Storefront::open_default(store.clone());

    let shop_id = ShopId::new("s3");
    shop.add_shop(Shop::new(shop_id.clone(), "سوق الخير", "").unwrap())
        .unwrap();
    let category_id = CategoryId::new("c3");
    shop.add_category(Category::new(category_id.clone(), "ألبان", "").unwrap())
        .unwrap();

    let product = Product::new(
        ProductId::new("p3"),
        "جبنة بيضاء",
        20.0,
        "كيلو",
        shop_id,
        category_id,
        "",
    )
    .unwrap();
    shop.add_product(product).unwrap();

    shop.add_to_cart(&ProductId::new("p3")).unwrap();
    let order_id = shop.place_order(&customer()).unwrap();
    shop.set_order_status(&order_id, OrderStatus::Processing).unwrap();

    let persisted: Option<MarketState> = store.get("aqraba_store_data").unwrap();
    let persisted = persisted.unwrap();
    assert_eq!(persisted.products.len(), 3);
    assert_eq!(persisted.orders[0].status, OrderStatus::Processing);
}

#[test]
fn deleting_a_shop_leaves_its_products_searchable() {
    let mut shop = Storefront::open_default(MemoryStore::new());

    assert!(shop.delete_shop(&ShopId::new("s1")));

    // p1 still exists and still matches by its own name.
    shop.set_search_query("تفاح");
    let visible = shop.visible_products();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, ProductId::new("p1"));

    // The deleted shop's name no longer matches anything.
    shop.set_search_query("القدس");
    assert!(shop.visible_products().is_empty());
}

#[test]
fn search_and_narrowing_compose() {
    let mut shop = Storefront::open_default(MemoryStore::new());

    shop.set_category_filter(Some(CategoryId::new("c2")));
    let visible = shop.visible_products();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, ProductId::new("p2"));

    shop.set_shop_filter(Some(ShopId::new("s1")));
    assert!(shop.visible_products().is_empty());

    shop.set_category_filter(None);
    shop.set_shop_filter(None);
    assert_eq!(shop.visible_products().len(), 2);
}

#[test]
fn featured_products_are_those_on_sale() {
    let shop = Storefront::open_default(MemoryStore::new());
    let featured = shop.featured_products();
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0].id, ProductId::new("p1"));
}
