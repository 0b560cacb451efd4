//! # cart-core: Business Logic for Shopcart
//!
//! This crate is the **heart** of Shopcart. It owns the shopping cart
//! aggregate and the receipt formats it can be exported to.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopcart Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Front-end (shopcart CLI, GUIs)                  │   │
//! │  │       Catalog ──► Add / Remove ──► Totals ──► Receipt          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Cart API                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cart-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   item    │  │   money   │  │   cart    │  │  receipt  │  │   │
//! │  │   │   Item    │  │   Price   │  │ShoppingCart│ │ Selector  │  │   │
//! │  │   │  Catalog  │  │ rounding  │  │ ItemGroup │  │ 4 formats │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`] - The immutable [`Item`] value
//! - [`catalog`] - Item templates a front-end instantiates items from
//! - [`money`] - [`Price`], exact decimal money with bankers rounding
//! - [`cart`] - The [`ShoppingCart`] aggregate
//! - [`receipt`] - Receipt strategies and the [`ReceiptSelector`]
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Example Usage
//!
//! ```rust
//! use cart_core::{Item, ShoppingCart};
//!
//! let mut cart = ShoppingCart::new();
//! let apple = Item::from_f64("Apple", 1.00).unwrap();
//! cart.add_item(apple.clone());
//! cart.add_item(Item::from_f64("Banana", 0.50).unwrap());
//!
//! assert_eq!(cart.total_quantity(), 2);
//! assert_eq!(cart.total_price().to_fixed_2(), "1.50");
//!
//! cart.remove_item(&apple).unwrap();
//! assert_eq!(cart.total_quantity(), 1);
//!
//! let receipt = cart.generate_receipt("csv", None).unwrap();
//! assert!(receipt.starts_with("UID,Name,Unit Price"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod item;
pub mod money;
pub mod receipt;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{ItemGroup, ShoppingCart};
pub use catalog::{Catalog, ItemTemplate};
pub use error::{CartError, CartResult, ValidationError};
pub use item::Item;
pub use money::Price;
pub use receipt::{ReceiptFormat, ReceiptSelector, ReceiptSnapshot, ReceiptStrategy};

/// Re-exported so callers can build prices without naming the crate.
pub use rust_decimal::Decimal;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of an item name, in characters.
pub const MAX_ITEM_NAME_LEN: usize = 200;

/// Number of decimal places totals and printed prices are rounded to.
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// Largest accepted price, in whole units (10^15).
///
/// A running total of capped prices cannot leave `Decimal` range before
/// the cart holds about 7.9 * 10^13 items.
pub const MAX_PRICE: i64 = 1_000_000_000_000_000;
