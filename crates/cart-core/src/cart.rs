//! # Shopping Cart
//!
//! The aggregate root: items grouped by name, with running totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Caller Action           Cart Method               State Change         │
//! │  ─────────────           ───────────               ────────────         │
//! │                                                                         │
//! │  Drop item in cart ────► add_item(item) ─────────► group.push(item)     │
//! │                                                    totals += price      │
//! │                                                                         │
//! │  Remove one item ──────► remove_item(&item) ─────► group.remove(uid)    │
//! │                                                    totals -= price      │
//! │                                                    empty group dropped  │
//! │                                                                         │
//! │  Empty the cart ───────► clear_cart() ───────────► groups.clear()       │
//! │                                                                         │
//! │  Print receipt ────────► generate_receipt(fmt) ──► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `total_quantity` == sum of every group's instance count
//! - `total_price` (exact) == sum of every group's `total_price`
//! - A group with zero instances is never present
//! - Group order is the order names were first added
//!
//! ## Thread Safety
//! None. Mutations update a group and then the cart totals in separate
//! steps; callers sharing a cart across threads wrap it in a `Mutex`.

use std::path::Path;

use tracing::debug;

use crate::error::{CartError, CartResult};
use crate::item::Item;
use crate::money::Price;
use crate::receipt::{ReceiptSelector, ReceiptSnapshot};
use crate::validation::parse_uid;

// =============================================================================
// Item Group
// =============================================================================

/// All instances in the cart that share one name.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemGroup {
    name: String,
    instances: Vec<Item>,
    total_price: Price,
}

impl ItemGroup {
    fn new(name: &str) -> Self {
        ItemGroup {
            name: name.to_string(),
            instances: Vec::new(),
            total_price: Price::zero(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Instances in insertion order.
    pub fn instances(&self) -> &[Item] {
        &self.instances
    }

    pub fn total_quantity(&self) -> usize {
        self.instances.len()
    }

    /// Exact sum of the instances' prices.
    pub fn total_price(&self) -> Price {
        self.total_price
    }
}

// =============================================================================
// Shopping Cart
// =============================================================================

/// The shopping cart.
///
/// Owns its groups, which own their items. Receipt formats come from the
/// [`ReceiptSelector`] the cart was built with.
#[derive(Debug, Default)]
pub struct ShoppingCart {
    groups: Vec<ItemGroup>,
    total_price: Price,
    total_quantity: usize,
    receipts: ReceiptSelector,
}

impl ShoppingCart {
    /// Creates an empty cart with all four receipt formats.
    pub fn new() -> Self {
        ShoppingCart::with_receipts(ReceiptSelector::standard())
    }

    /// Creates an empty cart that exports through `receipts`.
    pub fn with_receipts(receipts: ReceiptSelector) -> Self {
        ShoppingCart {
            groups: Vec::new(),
            total_price: Price::zero(),
            total_quantity: 0,
            receipts,
        }
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adds an item to the group for its name, creating the group if needed.
    ///
    /// Prices are capped at [`MAX_PRICE`](crate::MAX_PRICE), so the running
    /// totals cannot overflow and adding always succeeds.
    pub fn add_item(&mut self, item: Item) {
        let price = item.price();
        let uid = item.uid();
        let name = item.name().to_string();
        let total_price = self.total_price + price;

        let index = match self.position(&name) {
            Some(index) => index,
            None => {
                self.groups.push(ItemGroup::new(&name));
                self.groups.len() - 1
            }
        };

        let group = &mut self.groups[index];
        group.total_price += price;
        group.instances.push(item);

        self.total_price = total_price;
        self.total_quantity += 1;

        debug!(%name, %uid, "Added item to cart");
    }

    /// Removes the instance with `item`'s uid from `item`'s group.
    ///
    /// ## Behavior
    /// - Name unknown: `ItemNotFound`, cart untouched
    /// - Name known, uid unknown: `InstanceNotFound`, cart untouched
    /// - Last instance of a name: the whole group is dropped
    ///
    /// ## Returns
    /// The removed instance.
    pub fn remove_item(&mut self, item: &Item) -> CartResult<Item> {
        let group_index = self
            .position(item.name())
            .ok_or_else(|| CartError::ItemNotFound {
                name: item.name().to_string(),
            })?;

        let group = &mut self.groups[group_index];
        let instance_index = group
            .instances
            .iter()
            .position(|i| i.uid() == item.uid())
            .ok_or_else(|| CartError::InstanceNotFound {
                name: item.name().to_string(),
                uid: item.uid().to_string(),
            })?;

        // Every check has passed; from here on the removal always completes.
        let removed = group.instances.remove(instance_index);
        group.total_price -= removed.price();
        self.total_price -= removed.price();
        self.total_quantity -= 1;

        if self.groups[group_index].instances.is_empty() {
            self.groups.remove(group_index);
            debug!(name = %removed.name(), "All instances removed from cart");
        } else {
            debug!(name = %removed.name(), uid = %removed.uid(), "Removed item from cart");
        }

        Ok(removed)
    }

    /// Removes every group and resets both totals.
    pub fn clear_cart(&mut self) {
        self.groups.clear();
        self.total_price = Price::zero();
        self.total_quantity = 0;
        debug!("Cleared all items from the cart");
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Finds one instance by name and uid text.
    ///
    /// The text is parsed as a UUID and compared as a typed value, so any
    /// spelling of the same UUID matches. Text that is not a UUID matches
    /// nothing.
    pub fn get_item(&self, name: &str, uid: &str) -> CartResult<&Item> {
        let group = self.group(name)?;
        let not_found = || CartError::InstanceNotFound {
            name: name.to_string(),
            uid: uid.to_string(),
        };

        let uid = parse_uid(uid).map_err(|_| not_found())?;
        group
            .instances
            .iter()
            .find(|item| item.uid() == uid)
            .ok_or_else(not_found)
    }

    /// Copies every group, in group order.
    pub fn list_items(&self) -> Vec<ItemGroup> {
        self.groups.clone()
    }

    /// Copies the instances of one group.
    pub fn list_items_by_name(&self, name: &str) -> CartResult<Vec<Item>> {
        Ok(self.group(name)?.instances.clone())
    }

    pub fn get_total_quantity_by_name(&self, name: &str) -> CartResult<usize> {
        Ok(self.group(name)?.total_quantity())
    }

    /// Running total rounded half-to-even to two decimal places.
    pub fn total_price(&self) -> Price {
        self.total_price.rounded()
    }

    /// Running total before rounding.
    pub fn total_price_exact(&self) -> Price {
        self.total_price
    }

    pub fn total_quantity(&self) -> usize {
        self.total_quantity
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of distinct item names.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    // -------------------------------------------------------------------------
    // Export
    // -------------------------------------------------------------------------

    /// Read-only view handed to receipt strategies.
    pub fn snapshot(&self) -> ReceiptSnapshot<'_> {
        ReceiptSnapshot::new(&self.groups, self.total_price())
    }

    /// Renders the cart in `format` and optionally saves it to `file_path`.
    ///
    /// ## Errors
    /// - `UnsupportedFormat` when `format` is not registered
    /// - `Io` when the file cannot be written
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::{Item, ShoppingCart};
    ///
    /// let mut cart = ShoppingCart::new();
    /// cart.add_item(Item::from_f64("Tea", 4.50).unwrap());
    ///
    /// let text = cart.generate_receipt("TEXT", None).unwrap();
    /// assert!(text.ends_with("Total Price: $4.50"));
    /// assert!(cart.generate_receipt("bogus", None).is_err());
    /// ```
    pub fn generate_receipt(&self, format: &str, file_path: Option<&Path>) -> CartResult<String> {
        let strategy = self.receipts.resolve(format)?;
        let content = strategy.generate(&self.snapshot(), file_path)?;
        debug!(format = %strategy.format(), items = self.total_quantity, "Receipt generated");
        Ok(content)
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn position(&self, name: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.name == name)
    }

    fn group(&self, name: &str) -> CartResult<&ItemGroup> {
        self.groups
            .iter()
            .find(|g| g.name == name)
            .ok_or_else(|| CartError::ItemNotFound {
                name: name.to_string(),
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
