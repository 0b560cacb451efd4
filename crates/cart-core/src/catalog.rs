//! # Item Catalog
//!
//! Named, priced templates that a front-end turns into fresh [`Item`]s.
//!
//! ## Template vs Item
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog                         Cart                                   │
//! │  ───────                         ────                                   │
//! │  ItemTemplate "Apple" $1.00 ──┬─► Item Apple $1.00 uid=5f0c…            │
//! │                               └─► Item Apple $1.00 uid=a91e…            │
//! │                                                                         │
//! │  A template has no identity; every instantiate() mints a new uid.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use uuid::Uuid;

use crate::error::{CartError, CartResult, ValidationError, ValidationResult};
use crate::item::Item;
use crate::money::Price;
use crate::validation::{validate_item_name, validate_template_price};

/// Built-in grocery templates, in display order. Prices are in cents.
const BUILTIN_TEMPLATES: &[(&str, u32)] = &[
    ("Apple", 100),
    ("Banana", 50),
    ("Orange", 75),
    ("Milk", 250),
    ("Bread", 150),
    ("Eggs (Dozen)", 300),
    ("Cheese", 400),
    ("Chocolate", 225),
    ("Coffee", 500),
    ("Tea", 450),
    ("Chicken Breast", 750),
    ("Salmon Fillet", 900),
    ("Rice (1kg)", 180),
    ("Pasta", 120),
    ("Tomato Sauce", 100),
    ("Lettuce", 90),
    ("Carrots (1kg)", 110),
    ("Potatoes (1kg)", 80),
    ("Yogurt", 200),
    ("Cereal", 350),
];

// =============================================================================
// Item Template
// =============================================================================

/// A validated name/price pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTemplate {
    name: String,
    price: Price,
}

impl ItemTemplate {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Mints a new item with a fresh uid.
    pub fn instantiate(&self) -> Item {
        Item::from_parts(self.name.clone(), self.price, Uuid::new_v4())
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// An ordered set of templates with unique names.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    templates: Vec<ItemTemplate>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Creates a catalog holding the twenty built-in grocery templates.
    pub fn builtin() -> Self {
        let templates = BUILTIN_TEMPLATES
            .iter()
            .map(|&(name, cents)| ItemTemplate {
                name: name.to_string(),
                price: Price::from_cents(cents),
            })
            .collect();
        Catalog { templates }
    }

    /// Adds a user-created template.
    ///
    /// ## Rules
    /// - Name must pass [`validate_item_name`]
    /// - Price text must parse and be strictly positive
    /// - Name must not already be in the catalog (case-sensitive)
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::Catalog;
    ///
    /// let mut catalog = Catalog::builtin();
    /// catalog.add_template("Widget", "3.99").unwrap();
    /// assert!(catalog.add_template("Widget", "1.00").is_err());
    /// assert!(catalog.add_template("Gizmo", "0").is_err());
    /// ```
    pub fn add_template(&mut self, name: &str, price: &str) -> ValidationResult<&ItemTemplate> {
        validate_item_name(name)?;
        let price: Price = price.parse()?;
        validate_template_price(price)?;

        if self.get(name).is_some() {
            return Err(ValidationError::Duplicate {
                field: "name".to_string(),
                value: name.to_string(),
            });
        }

        self.templates.push(ItemTemplate {
            name: name.to_string(),
            price,
        });
        Ok(&self.templates[self.templates.len() - 1])
    }

    /// Looks up a template by exact name.
    pub fn get(&self, name: &str) -> Option<&ItemTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Mints a fresh item from the named template.
    pub fn instantiate(&self, name: &str) -> CartResult<Item> {
        self.get(name)
            .map(ItemTemplate::instantiate)
            .ok_or_else(|| CartError::ItemNotFound {
                name: name.to_string(),
            })
    }

    pub fn templates(&self) -> &[ItemTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
