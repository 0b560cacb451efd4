//! # Item
//!
//! One priced unit that can be placed in a cart.
//!
//! ## Identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Item { name: "Apple", price: 1.00, uid: 5f0c… }                        │
//! │  Item { name: "Apple", price: 1.00, uid: a91e… }                        │
//! │                                                                         │
//! │  Same name, same price, two different entities.                        │
//! │  The cart groups them by name but removes them by uid.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Fields are private and there are no setters: once built, an item never
//! changes.

use std::fmt;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::ValidationResult;
use crate::money::Price;
use crate::validation::validate_item_name;

/// An immutable priced unit with a unique identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    name: String,
    price: Price,
    uid: Uuid,
}

impl Item {
    /// Creates an item with a fresh UUID v4.
    ///
    /// ## Errors
    /// - `Required` / `TooLong` for a bad name
    /// - `Negative` for a price below zero
    pub fn new(name: impl Into<String>, price: Decimal) -> ValidationResult<Self> {
        Item::with_uid(name, price, Uuid::new_v4())
    }

    /// Creates an item from a float price.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::Item;
    ///
    /// let apple = Item::from_f64("Apple", 0.99).unwrap();
    /// assert_eq!(apple.name(), "Apple");
    /// assert!(Item::from_f64("Apple", -1.0).is_err());
    /// assert!(Item::from_f64("", 1.0).is_err());
    /// ```
    pub fn from_f64(name: impl Into<String>, price: f64) -> ValidationResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        Ok(Item::from_parts(name, Price::from_f64(price)?, Uuid::new_v4()))
    }

    /// Creates an item that deliberately shares an existing identifier.
    pub fn with_uid(name: impl Into<String>, price: Decimal, uid: Uuid) -> ValidationResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        Ok(Item::from_parts(name, Price::new(price)?, uid))
    }

    /// Assembles an item from already validated parts.
    pub(crate) fn from_parts(name: String, price: Price, uid: Uuid) -> Self {
        Item { name, price, uid }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn uid(&self) -> Uuid {
        self.uid
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.price)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
