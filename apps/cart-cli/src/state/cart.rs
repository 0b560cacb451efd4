//! # Cart State
//!
//! Holds the shopping cart a command is working on.
//!
//! ## Thread Safety
//! `ShoppingCart` does no locking of its own. The front-end wraps it in
//! `Arc<Mutex<T>>` so every mutation runs with exclusive access:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  CLI Input              Command               Cart State Change         │
//! │  ─────────              ───────               ─────────────────         │
//! │                                                                         │
//! │  receipt Apple ───────► fill_cart() ────────► cart.add_item(item)       │
//! │                                                                         │
//! │  --remove Apple ──────► remove_latest() ────► cart.remove_item(&item)   │
//! │                                                                         │
//! │  summary ─────────────► state.summary() ────► (read only)               │
//! │                                                                         │
//! │  NOTE: All operations hold the Mutex lock for the whole closure.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use cart_core::{ReceiptSelector, ShoppingCart};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Per-name line of a cart summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    pub name: String,
    pub quantity: usize,
    /// Group total, two decimals, no symbol
    pub total_price: String,
}

/// Cart totals summary for `summary` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub groups: Vec<GroupSummary>,
    pub total_quantity: usize,
    /// Rounded cart total, two decimals, no symbol
    pub total_price: String,
    pub opened_at: DateTime<Utc>,
}

impl CartSummary {
    pub fn new(cart: &ShoppingCart, opened_at: DateTime<Utc>) -> Self {
        CartSummary {
            groups: cart
                .list_items()
                .iter()
                .map(|group| GroupSummary {
                    name: group.name().to_string(),
                    quantity: group.total_quantity(),
                    total_price: group.total_price().to_fixed_2(),
                })
                .collect(),
            total_quantity: cart.total_quantity(),
            total_price: cart.total_price().to_fixed_2(),
            opened_at,
        }
    }
}

/// Shared cart state.
///
/// ## Why Not RwLock?
/// Commands mostly mutate the cart; a RwLock would add complexity with
/// minimal benefit.
#[derive(Debug)]
pub struct CartState {
    cart: Arc<Mutex<ShoppingCart>>,
    opened_at: DateTime<Utc>,
}

impl CartState {
    /// Creates a state holding an empty cart with every receipt format.
    pub fn new() -> Self {
        CartState::with_receipts(ReceiptSelector::standard())
    }

    /// Creates a state whose cart exports through `receipts`.
    pub fn with_receipts(receipts: ReceiptSelector) -> Self {
        CartState {
            cart: Arc::new(Mutex::new(ShoppingCart::with_receipts(receipts))),
            opened_at: Utc::now(),
        }
    }

    /// When this cart session started.
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Totals and per-name quantities of the current cart.
    pub fn summary(&self) -> CartSummary {
        self.with_cart(|cart| CartSummary::new(cart, self.opened_at))
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// use cart_cli::state::CartState;
    ///
    /// let state = CartState::new();
    /// assert!(state.with_cart(|cart| cart.is_empty()));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ShoppingCart) -> R,
    {
        // Cart mutations check everything before writing, so a poisoned
        // cart is still consistent.
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// use cart_cli::state::CartState;
    /// use cart_core::Item;
    ///
    /// let state = CartState::new();
    /// state.with_cart_mut(|cart| cart.add_item(Item::from_f64("Tea", 4.5).unwrap()));
    /// assert_eq!(state.with_cart(|cart| cart.total_quantity()), 1);
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ShoppingCart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CartState {
    /// Shares the same cart.
    fn clone(&self) -> Self {
        CartState {
            cart: Arc::clone(&self.cart),
            opened_at: self.opened_at,
        }
    }
}
