//! Cart behaviour seen only through the public API.

use std::collections::HashSet;

use cart_core::{CartError, Decimal, Item, Price, ShoppingCart, ValidationError, MAX_PRICE};
use tempfile::TempDir;

fn item(name: &str, price: f64) -> Item {
    Item::from_f64(name, price).expect("valid item")
}

/// Apple 1.00, Banana 0.50, Apple 1.00, Orange 0.75.
fn grocery_cart() -> (ShoppingCart, Vec<Item>) {
    let items = vec![
        item("Apple", 1.00),
        item("Banana", 0.50),
        item("Apple", 1.00),
        item("Orange", 0.75),
    ];
    let mut cart = ShoppingCart::new();
    for item in &items {
        cart.add_item(item.clone());
    }
    (cart, items)
}

fn uid_set(items: &[Item]) -> HashSet<String> {
    items.iter().map(|i| i.uid().to_string()).collect()
}

// =============================================================================
// Receipts parse back to the cart contents
// =============================================================================

#[test]
fn test_csv_receipt_parses_back() {
    let (cart, items) = grocery_cart();
    let receipt = cart.generate_receipt("csv", None).unwrap();
    let lines: Vec<&str> = receipt.lines().collect();

    assert_eq!(lines[0], "UID,Name,Unit Price");
    assert_eq!(lines[lines.len() - 1], "Total Price,,3.25");

    let rows = &lines[1..lines.len() - 1];
    assert_eq!(rows.len(), 4);
    let uids: HashSet<String> = rows
        .iter()
        .map(|row| row.split(',').next().unwrap().to_string())
        .collect();
    assert_eq!(uids, uid_set(&items));
}

#[test]
fn test_text_receipt_parses_back() {
    let (cart, items) = grocery_cart();
    let receipt = cart.generate_receipt("text", None).unwrap();

    let uids: HashSet<String> = receipt
        .lines()
        .filter_map(|line| line.strip_prefix("UID: "))
        .map(|rest| rest.split(" | ").next().unwrap().to_string())
        .collect();
    assert_eq!(uids, uid_set(&items));
    assert!(receipt.ends_with("Total Price: $3.25"));
}

#[test]
fn test_json_receipt_parses_back() {
    let (cart, items) = grocery_cart();
    let receipt = cart.generate_receipt("json", None).unwrap();
    let value: serde_json::Value = serde_json::from_str(&receipt).unwrap();

    let lines = value["items"].as_array().unwrap();
    assert_eq!(lines.len(), 4);
    let uids: HashSet<String> = lines
        .iter()
        .map(|l| l["uid"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(uids, uid_set(&items));
    assert_eq!(value["total_price"].as_f64().unwrap(), 3.25);
}

#[test]
fn test_yaml_receipt_parses_back() {
    let (cart, items) = grocery_cart();
    let receipt = cart.generate_receipt("yaml", None).unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&receipt).unwrap();

    let lines = value["items"].as_sequence().unwrap();
    assert_eq!(lines.len(), 4);
    let uids: HashSet<String> = lines
        .iter()
        .map(|l| l["uid"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(uids, uid_set(&items));
    assert_eq!(value["total_price"].as_f64().unwrap(), 3.25);
}

// =============================================================================
// End-to-end scenario
// =============================================================================

#[test]
fn test_add_remove_scenario() {
    let mut cart = ShoppingCart::new();
    let apple1 = item("Apple", 1.00);
    let banana = item("Banana", 0.50);
    let apple2 = item("Apple", 1.00);

    cart.add_item(apple1.clone());
    cart.add_item(banana.clone());
    cart.add_item(apple2.clone());
    assert_eq!(cart.total_quantity(), 3);
    assert_eq!(cart.total_price().to_fixed_2(), "2.50");
    assert_eq!(cart.get_total_quantity_by_name("Apple").unwrap(), 2);

    cart.remove_item(&apple1).unwrap();
    assert_eq!(cart.total_quantity(), 2);
    assert_eq!(cart.total_price().to_fixed_2(), "1.50");

    cart.remove_item(&banana).unwrap();
    assert!(matches!(
        cart.get_total_quantity_by_name("Banana"),
        Err(CartError::ItemNotFound { .. })
    ));

    cart.remove_item(&apple2).unwrap();
    assert!(cart.is_empty());
    assert_eq!(cart.total_price(), Price::zero());

    let receipt = cart.generate_receipt("csv", None).unwrap();
    assert_eq!(receipt, "UID,Name,Unit Price\nTotal Price,,0.00");
}

#[test]
fn test_totals_track_contents_after_mixed_operations() {
    let mut cart = ShoppingCart::new();
    let mut kept: Vec<Item> = Vec::new();

    for round in 0..5u32 {
        for name in ["Milk", "Bread", "Tea"] {
            let it = item(name, 0.1 * f64::from(round + 1));
            cart.add_item(it.clone());
            kept.push(it);
        }
        let victim = kept.remove(0);
        cart.remove_item(&victim).unwrap();
    }

    let expected: Price = kept.iter().map(Item::price).sum();
    assert_eq!(cart.total_quantity(), kept.len());
    assert_eq!(cart.total_price_exact(), expected);
    assert_eq!(cart.total_price(), expected.rounded());
}

// =============================================================================
// Rounding at the cart level
// =============================================================================

#[test]
fn test_total_rounding_boundaries() {
    let cases = [
        (0.005, "0.00"),
        (0.015, "0.02"),
        (2.675, "2.68"),
        (999.9999, "1000.00"),
    ];
    for (price, expected) in cases {
        let mut cart = ShoppingCart::new();
        cart.add_item(item("Thing", price));
        assert_eq!(cart.total_price().to_fixed_2(), expected, "price {price}");
    }
}

#[test]
fn test_csv_rounds_unit_price_but_json_keeps_it() {
    let mut cart = ShoppingCart::new();
    cart.add_item(item("Laptop", 999.9999));

    let csv = cart.generate_receipt("csv", None).unwrap();
    assert!(csv.contains(",Laptop,1000.00\n"));

    let json = cart.generate_receipt("json", None).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["items"][0]["unit_price"].as_f64().unwrap(), 999.9999);
    assert_eq!(value["total_price"].as_f64().unwrap(), 1000.0);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_failed_removal_is_atomic() {
    let (mut cart, _) = grocery_cart();
    let before = cart.list_items();

    assert!(cart.remove_item(&item("Kiwi", 1.00)).is_err());
    assert!(cart.remove_item(&item("Apple", 1.00)).is_err());

    assert_eq!(cart.list_items(), before);
    assert_eq!(cart.total_quantity(), 4);
    assert_eq!(cart.total_price().to_fixed_2(), "3.25");
}

#[test]
fn test_lookups_on_missing_names() {
    let (cart, items) = grocery_cart();
    let uid = items[0].uid().to_string();

    assert!(cart.get_item("Kiwi", &uid).unwrap_err().is_not_found());
    assert!(cart.list_items_by_name("Kiwi").unwrap_err().is_not_found());
    assert!(cart.get_total_quantity_by_name("Kiwi").unwrap_err().is_not_found());
    assert!(matches!(
        cart.get_item("Banana", &uid),
        Err(CartError::InstanceNotFound { .. })
    ));
    assert_eq!(cart.get_item("Apple", &uid).unwrap(), &items[0]);
}

#[test]
fn test_bogus_format() {
    let (cart, _) = grocery_cart();
    let err = cart.generate_receipt("bogus", None).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("bogus"));
    assert!(message.contains("csv"));
    assert!(message.contains("yaml"));
}

// =============================================================================
// Writing receipts to disk
// =============================================================================

#[test]
fn test_receipt_file_matches_returned_text() {
    let (cart, _) = grocery_cart();
    let dir = TempDir::new().unwrap();

    for format in ["csv", "text", "json", "yaml"] {
        let path = dir.path().join(format!("receipt.{format}"));
        let returned = cart.generate_receipt(format, Some(&path)).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, returned, "{format} file differs");
    }
}

#[test]
fn test_receipt_to_missing_directory() {
    let (cart, _) = grocery_cart();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("receipt.csv");

    match cart.generate_receipt("csv", Some(&path)) {
        Err(CartError::Io { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("expected Io error, got {:?}", other),
    }
}

// =============================================================================
// Extreme prices
// =============================================================================

#[test]
fn test_max_price_items_keep_totals_exact() {
    let max = Decimal::from(MAX_PRICE);
    let mut cart = ShoppingCart::new();
    let yachts: Vec<Item> = (0..2).map(|_| Item::new("Yacht", max).unwrap()).collect();
    for yacht in &yachts {
        cart.add_item(yacht.clone());
    }
    cart.add_item(item("Dinghy", 0.01));

    assert_eq!(cart.total_quantity(), 3);
    assert_eq!(
        cart.total_price_exact().amount(),
        max * Decimal::TWO + Decimal::new(1, 2)
    );
    assert_eq!(cart.total_price().to_fixed_2(), "2000000000000000.01");

    let csv = cart.generate_receipt("csv", None).unwrap();
    assert!(csv.ends_with("Total Price,,2000000000000000.01"));

    cart.remove_item(&yachts[0]).unwrap();
    assert_eq!(cart.total_price().to_fixed_2(), "1000000000000000.01");
}

#[test]
fn test_prices_above_max_are_rejected() {
    for amount in [
        Decimal::from(MAX_PRICE) + Decimal::new(1, 2),
        Decimal::MAX / Decimal::TWO + Decimal::ONE,
        Decimal::MAX,
    ] {
        assert!(matches!(
            Item::new("Yacht", amount),
            Err(ValidationError::TooLarge { .. })
        ));
    }
    assert!(matches!(
        Item::from_f64("Yacht", 5e28),
        Err(ValidationError::TooLarge { .. })
    ));
}

#[test]
fn test_tiny_prices() {
    let mut cart = ShoppingCart::new();
    let speck = item("Speck", 1e-20);
    cart.add_item(speck.clone());
    cart.add_item(item("Speck", 1e-20));
    cart.add_item(item("Dust", 1e-30));

    assert_eq!(cart.total_quantity(), 3);
    assert_eq!(
        cart.total_price_exact(),
        "0.00000000000000000002".parse::<Price>().unwrap()
    );
    assert_eq!(cart.total_price().to_fixed_2(), "0.00");
    assert!(cart.list_items_by_name("Dust").unwrap()[0].price().is_zero());

    let text = cart.generate_receipt("text", None).unwrap();
    assert!(text.ends_with("Total Price: $0.00"));

    cart.remove_item(&speck).unwrap();
    assert_eq!(
        cart.total_price_exact(),
        "0.00000000000000000001".parse::<Price>().unwrap()
    );
}
