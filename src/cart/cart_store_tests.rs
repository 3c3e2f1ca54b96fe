use rust_decimal_macros::dec;

use super::*;
use crate::catalog::{Category, MenuItem};

fn item(id: &str, name: &str, price: rust_decimal::Decimal, stock: u32) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: "A test item".to_string(),
        price,
        category: Category::Drinks,
        image: String::new(),
        available: true,
        stock,
        calories: None,
    }
}

#[test]
fn test_add_inserts_line_with_quantity_one() {
    let mut cart = Cart::new();
    cart.add(&item("1", "Espresso", dec!(3.00), 5)).unwrap();

    let line = cart.get("1").unwrap();
    assert_eq!(line.quantity, 1);
    assert_eq!(line.price, dec!(3.00));
    assert_eq!(cart.len(), 1);
}

#[test]
fn test_add_increments_existing_line() {
    let mut cart = Cart::new();
    let espresso = item("1", "Espresso", dec!(3.00), 5);

    cart.add(&espresso).unwrap();
    cart.add(&espresso).unwrap();

    assert_eq!(cart.get("1").unwrap().quantity, 2);
    assert_eq!(cart.len(), 1);
}

#[test]
fn test_add_declines_when_sold_out() {
    let mut cart = Cart::new();
    let result = cart.add(&item("1", "Espresso", dec!(3.00), 0));

    assert!(matches!(result, Err(CartError::SoldOut { .. })));
    assert!(cart.is_empty());
}

#[test]
fn test_add_caps_quantity_at_current_stock() {
    // Scenario A: stock 3, three adds succeed, the fourth is declined.
    let mut cart = Cart::new();
    let latte = item("1", "Latte", dec!(4.00), 3);

    for _ in 0..3 {
        cart.add(&latte).unwrap();
    }
    assert_eq!(cart.get("1").unwrap().quantity, 3);

    let result = cart.add(&latte);
    assert!(matches!(
        result,
        Err(CartError::StockLimitReached { available: 3, .. })
    ));
    assert_eq!(cart.get("1").unwrap().quantity, 3);
}

#[test]
fn test_remove_deletes_line_and_tolerates_absent_id() {
    let mut cart = Cart::new();
    cart.add(&item("1", "Espresso", dec!(3.00), 5)).unwrap();

    cart.remove("1");
    assert!(cart.is_empty());

    cart.remove("1");
    assert!(cart.is_empty());
}

#[test]
fn test_set_quantity_zero_removes_line() {
    let mut cart = Cart::new();
    cart.add(&item("1", "Espresso", dec!(3.00), 5)).unwrap();

    cart.set_quantity("1", 0, Some(5)).unwrap();
    assert!(cart.is_empty());
}

#[test]
fn test_set_quantity_declines_above_stock() {
    let mut cart = Cart::new();
    cart.add(&item("1", "Espresso", dec!(3.00), 5)).unwrap();

    let result = cart.set_quantity("1", 6, Some(5));
    assert!(matches!(
        result,
        Err(CartError::InsufficientStock { available: 5, .. })
    ));
    assert_eq!(cart.get("1").unwrap().quantity, 1);
}

#[test]
fn test_set_quantity_skips_cap_check_when_item_gone() {
    let mut cart = Cart::new();
    cart.add(&item("1", "Espresso", dec!(3.00), 5)).unwrap();

    // Item deleted from the catalog: quantity is still set, checkout
    // re-validation catches the stale line later.
    cart.set_quantity("1", 4, None).unwrap();
    assert_eq!(cart.get("1").unwrap().quantity, 4);
}

#[test]
fn test_set_quantity_absent_line_is_noop() {
    let mut cart = Cart::new();
    cart.set_quantity("ghost", 2, Some(5)).unwrap();
    assert!(cart.is_empty());
}

#[test]
fn test_snapshot_price_survives_catalog_edit() {
    let mut cart = Cart::new();
    let mut espresso = item("1", "Espresso", dec!(3.00), 5);
    cart.add(&espresso).unwrap();

    // Catalog edit after the add must not leak into the cart line.
    espresso.price = dec!(9.99);
    assert_eq!(cart.get("1").unwrap().price, dec!(3.00));
}

#[test]
fn test_total_sums_price_times_quantity() {
    let mut cart = Cart::new();
    let a = item("a", "Item A", dec!(5.00), 10);
    let b = item("b", "Item B", dec!(3.00), 10);

    cart.add(&a).unwrap();
    cart.add(&a).unwrap();
    cart.add(&b).unwrap();

    assert_eq!(cart.total(), dec!(13.00));
}

#[test]
fn test_clear_empties_cart() {
    let mut cart = Cart::new();
    cart.add(&item("1", "Espresso", dec!(3.00), 5)).unwrap();

    cart.clear();
    assert!(cart.is_empty());
    assert_eq!(cart.total(), rust_decimal::Decimal::ZERO);
}
