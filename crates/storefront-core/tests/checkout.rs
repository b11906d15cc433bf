//! End-to-end checkout scenarios through the public API.

use std::sync::Arc;

use storefront_core::{
    CatalogConfig, CoreError, DiscountRate, Money, OrderLine, Product, Promotion, Store,
};

#[test]
fn widget_order_within_stock() {
    let widget = Product::new("Widget", Money::from_dollars(10), 5).unwrap();
    let id = widget.id();
    let mut store = Store::new(vec![widget]);

    let total = store.checkout(&[OrderLine::new(id, 3)]).unwrap();

    assert_eq!(total, Money::from_dollars(30));
    let widget = store.product(id).unwrap();
    assert_eq!(widget.quantity(), 2);
    assert!(widget.is_active());
}

#[test]
fn widget_order_over_stock_is_rejected_untouched() {
    let widget = Product::new("Widget", Money::from_dollars(10), 5).unwrap();
    let id = widget.id();
    let mut store = Store::new(vec![widget]);

    let err = store.checkout(&[OrderLine::new(id, 10)]).unwrap_err();

    assert_eq!(
        err,
        CoreError::InsufficientStock {
            product: "Widget".to_string(),
            available: 5,
            requested: 10,
        }
    );
    assert_eq!(store.product(id).unwrap().quantity(), 5);
}

#[test]
fn demo_catalog_mixed_order() {
    let mut store = CatalogConfig::demo().build().unwrap();
    let ids: Vec<_> = store.products().iter().map(Product::id).collect();

    // MacBook ×2 at second-half-price: $1450 × 1.5 = $2175
    // Earbuds ×3 at third-one-free:    $250 × 2     = $500
    // Pixel ×1, no promotion:                         $500
    // License ×4 at 30% off (per unit equivalent):    $87.50
    // Shipping, always one unit:                      $10
    let total = store
        .checkout(&[
            OrderLine::new(ids[0], 2),
            OrderLine::new(ids[1], 3),
            OrderLine::new(ids[2], 1),
            OrderLine::new(ids[3], 4),
            OrderLine::new(ids[4], 5),
        ])
        .unwrap();

    assert_eq!(total, Money::from_cents(2175_00 + 500_00 + 500_00 + 87_50 + 10_00));
    assert_eq!(store.product(ids[0]).unwrap().quantity(), 98);
    assert_eq!(store.product(ids[1]).unwrap().quantity(), 497);
    assert_eq!(store.product(ids[2]).unwrap().quantity(), 249);
    assert_eq!(store.product(ids[3]).unwrap().quantity(), 0);
    assert_eq!(store.product(ids[4]).unwrap().quantity(), 249);
    assert_eq!(store.total_quantity(), 98 + 497 + 249 + 249);
}

#[test]
fn sold_out_product_leaves_listing_but_not_total() {
    let gadget = Product::new("Gadget", Money::from_dollars(3), 2).unwrap();
    let spare = Product::new("Spare", Money::from_dollars(1), 4).unwrap();
    let gadget_id = gadget.id();
    let mut store = Store::new(vec![gadget, spare]);

    store.checkout(&[OrderLine::new(gadget_id, 2)]).unwrap();

    let listed: Vec<&str> = store
        .list_active_products()
        .iter()
        .map(|p| p.name())
        .collect();
    assert_eq!(listed, vec!["Spare"]);
    assert!(!store.contains("Gadget"));
    assert_eq!(store.total_quantity(), 4);

    // Restock and reactivate explicitly
    let gadget = store.product_mut(gadget_id).unwrap();
    gadget.set_quantity(10).unwrap();
    assert!(!gadget.is_active());
    gadget.activate();
    assert!(store.contains("Gadget"));
}

#[test]
fn fail_fast_versus_atomic() {
    let promo = Arc::new(
        Promotion::percent_off("10% off", DiscountRate::from_percentage(10.0)).unwrap(),
    );
    let mut cheap = Product::new("Cheap", Money::from_dollars(5), 10).unwrap();
    cheap.set_promotion(Arc::clone(&promo));
    let scarce = Product::new("Scarce", Money::from_dollars(50), 1).unwrap();
    let (cheap_id, scarce_id) = (cheap.id(), scarce.id());

    let order = [OrderLine::new(cheap_id, 4), OrderLine::new(scarce_id, 2)];

    let mut fail_fast = Store::new(vec![cheap.clone(), scarce.clone()]);
    assert!(fail_fast.checkout(&order).is_err());
    assert_eq!(fail_fast.product(cheap_id).unwrap().quantity(), 6);

    let mut atomic = Store::new(vec![cheap, scarce]);
    assert!(atomic.checkout_atomic(&order).is_err());
    assert_eq!(atomic.product(cheap_id).unwrap().quantity(), 10);
    assert_eq!(atomic.product(scarce_id).unwrap().quantity(), 1);
}

#[test]
fn merged_stores_check_out_across_both() {
    let a = Product::new("A", Money::from_dollars(2), 3).unwrap();
    let b = Product::unlimited("B", Money::from_dollars(7)).unwrap();
    let (ia, ib) = (a.id(), b.id());

    let mut merged = Store::new(vec![a]) + Store::new(vec![b]);
    let total = merged
        .checkout(&[OrderLine::new(ia, 3), OrderLine::new(ib, 100)])
        .unwrap();

    assert_eq!(total, Money::from_dollars(6 + 700));
    assert_eq!(merged.total_quantity(), 0);
    assert!(merged.list_active_products().iter().all(|p| p.name() == "B"));
}
