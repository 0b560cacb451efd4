//! # Receipt Module
//!
//! Renders a snapshot of the cart into one of four flat text formats.
//!
//! ## Strategy Selection
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Receipt Generation Flow                              │
//! │                                                                         │
//! │  cart.generate_receipt("JSON", Some(path))                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ReceiptSelector::resolve("JSON")   case-insensitive                    │
//! │         │                                                               │
//! │         ├── unknown? ──► CartError::UnsupportedFormat { supported }     │
//! │         ▼                                                               │
//! │  ┌──────────┬──────────┬──────────┬──────────┐                          │
//! │  │   csv    │   text   │   json   │   yaml   │  ReceiptStrategy         │
//! │  └──────────┴──────────┴──────────┴──────────┘                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  render(snapshot) ──► String ──► (optional) write to path              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The set of formats is closed. A selector is an explicit value owned by
//! the cart, never process-wide state, so tests can swap it freely.

mod csv;
mod json;
mod text;
mod yaml;

pub use self::csv::CsvReceipt;
pub use self::json::JsonReceipt;
pub use self::text::TextReceipt;
pub use self::yaml::YamlReceipt;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cart::ItemGroup;
use crate::error::{CartError, CartResult};
use crate::item::Item;
use crate::money::Price;

// =============================================================================
// Receipt Format
// =============================================================================

/// The four supported receipt formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReceiptFormat {
    Csv,
    Text,
    Json,
    Yaml,
}

impl ReceiptFormat {
    /// Every format, in registration order.
    pub const ALL: [ReceiptFormat; 4] = [
        ReceiptFormat::Csv,
        ReceiptFormat::Text,
        ReceiptFormat::Json,
        ReceiptFormat::Yaml,
    ];

    /// The lower-case name callers select the format by.
    pub const fn name(self) -> &'static str {
        match self {
            ReceiptFormat::Csv => "csv",
            ReceiptFormat::Text => "text",
            ReceiptFormat::Json => "json",
            ReceiptFormat::Yaml => "yaml",
        }
    }

    /// The stateless strategy that renders this format.
    pub fn strategy(self) -> Box<dyn ReceiptStrategy> {
        match self {
            ReceiptFormat::Csv => Box::new(CsvReceipt),
            ReceiptFormat::Text => Box::new(TextReceipt),
            ReceiptFormat::Json => Box::new(JsonReceipt),
            ReceiptFormat::Yaml => Box::new(YamlReceipt),
        }
    }
}

impl fmt::Display for ReceiptFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive: `"JSON"`, `"Json"` and `"json"` are the same format.
impl FromStr for ReceiptFormat {
    type Err = CartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReceiptFormat::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CartError::UnsupportedFormat {
                requested: s.to_string(),
                supported: ReceiptFormat::ALL
                    .iter()
                    .map(|f| f.name().to_string())
                    .collect(),
            })
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// A read-only view of the cart taken at export time.
///
/// Iteration order is group order (first time each name was added), then
/// insertion order inside each group.
#[derive(Debug, Clone, Copy)]
pub struct ReceiptSnapshot<'a> {
    groups: &'a [ItemGroup],
    total_price: Price,
}

impl<'a> ReceiptSnapshot<'a> {
    /// `total_price` is expected to be already rounded.
    pub fn new(groups: &'a [ItemGroup], total_price: Price) -> Self {
        ReceiptSnapshot {
            groups,
            total_price,
        }
    }

    /// Every item instance across every group.
    pub fn items(&self) -> impl Iterator<Item = &'a Item> + 'a {
        let groups: &'a [ItemGroup] = self.groups;
        groups.iter().flat_map(|group| group.instances().iter())
    }

    pub fn total_price(&self) -> Price {
        self.total_price
    }
}

// =============================================================================
// Structured Document (JSON / YAML)
// =============================================================================

/// The logical receipt shared by the JSON and YAML formats.
///
/// Field order here is the key order in the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptDocument {
    pub items: Vec<ReceiptLine>,
    pub total_price: f64,
}

/// One item instance in a structured receipt.
///
/// JSON and YAML both emit the keys in field order (`uid`, `name`,
/// `unit_price`); they are not sorted alphabetically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub uid: String,
    pub name: String,
    pub unit_price: f64,
}

impl ReceiptDocument {
    pub fn from_snapshot(snapshot: &ReceiptSnapshot<'_>) -> Self {
        ReceiptDocument {
            items: snapshot
                .items()
                .map(|item| ReceiptLine {
                    uid: item.uid().to_string(),
                    name: item.name().to_string(),
                    unit_price: item.price().to_f64(),
                })
                .collect(),
            total_price: snapshot.total_price().to_f64(),
        }
    }
}

// =============================================================================
// Strategy Trait
// =============================================================================

/// Renders a snapshot into one receipt format.
///
/// Implementations are stateless unit structs.
pub trait ReceiptStrategy: Send + Sync {
    /// The format this strategy produces.
    fn format(&self) -> ReceiptFormat;

    /// Produces the receipt text.
    fn render(&self, snapshot: &ReceiptSnapshot<'_>) -> CartResult<String>;

    /// Renders the receipt, then writes it to `file_path` if one is given.
    ///
    /// The file receives exactly the returned string.
    fn generate(
        &self,
        snapshot: &ReceiptSnapshot<'_>,
        file_path: Option<&Path>,
    ) -> CartResult<String> {
        let content = self.render(snapshot)?;
        if let Some(path) = file_path {
            write_receipt(path, &content)?;
        }
        Ok(content)
    }
}

/// Writes receipt text to disk as UTF-8.
pub fn write_receipt(path: &Path, content: &str) -> CartResult<()> {
    std::fs::write(path, content).map_err(|source| {
        warn!(path = %path.display(), error = %source, "Failed to write receipt");
        CartError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!(path = %path.display(), bytes = content.len(), "Receipt written");
    Ok(())
}

// =============================================================================
// Selector
// =============================================================================

/// Maps format names to strategies.
pub struct ReceiptSelector {
    strategies: Vec<Box<dyn ReceiptStrategy>>,
}

impl ReceiptSelector {
    /// A selector with all four formats registered.
    pub fn standard() -> Self {
        ReceiptFormat::ALL
            .into_iter()
            .fold(ReceiptSelector::empty(), |selector, format| {
                selector.with(format.strategy())
            })
    }

    /// A selector with nothing registered.
    pub fn empty() -> Self {
        ReceiptSelector {
            strategies: Vec::new(),
        }
    }

    /// Registers a strategy, replacing any earlier one for the same format.
    pub fn with(mut self, strategy: Box<dyn ReceiptStrategy>) -> Self {
        self.strategies.retain(|s| s.format() != strategy.format());
        self.strategies.push(strategy);
        self
    }

    /// Finds the strategy for `format_name`, ignoring case.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::{ReceiptFormat, ReceiptSelector};
    ///
    /// let selector = ReceiptSelector::standard();
    /// assert_eq!(selector.resolve("YAML").unwrap().format(), ReceiptFormat::Yaml);
    /// assert!(selector.resolve("bogus").is_err());
    /// ```
    pub fn resolve(&self, format_name: &str) -> CartResult<&dyn ReceiptStrategy> {
        self.strategies
            .iter()
            .find(|s| s.format().name().eq_ignore_ascii_case(format_name))
            .map(|s| s.as_ref())
            .ok_or_else(|| CartError::UnsupportedFormat {
                requested: format_name.to_string(),
                supported: self
                    .supported_formats()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            })
    }

    /// Registered format names, in registration order.
    pub fn supported_formats(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.format().name()).collect()
    }
}

impl Default for ReceiptSelector {
    fn default() -> Self {
        ReceiptSelector::standard()
    }
}

impl fmt::Debug for ReceiptSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReceiptSelector")
            .field("formats", &self.supported_formats())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::ShoppingCart;

    #[test]
    fn test_format_parsing_is_case_insensitive() {
        assert_eq!("csv".parse::<ReceiptFormat>().unwrap(), ReceiptFormat::Csv);
        assert_eq!("TEXT".parse::<ReceiptFormat>().unwrap(), ReceiptFormat::Text);
        assert_eq!("Json".parse::<ReceiptFormat>().unwrap(), ReceiptFormat::Json);
        assert_eq!("yAmL".parse::<ReceiptFormat>().unwrap(), ReceiptFormat::Yaml);
        assert!(" json".parse::<ReceiptFormat>().is_err());
    }

    #[test]
    fn test_standard_selector_order() {
        let selector = ReceiptSelector::standard();
        assert_eq!(
            selector.supported_formats(),
            vec!["csv", "text", "json", "yaml"]
        );
        for format in ReceiptFormat::ALL {
            let upper = format.name().to_uppercase();
            assert_eq!(selector.resolve(&upper).unwrap().format(), format);
        }
    }

    #[test]
    fn test_unsupported_format_lists_supported_set() {
        let selector = ReceiptSelector::standard();
        match selector.resolve("bogus") {
            Err(CartError::UnsupportedFormat {
                requested,
                supported,
            }) => {
                assert_eq!(requested, "bogus");
                assert_eq!(supported, vec!["csv", "text", "json", "yaml"]);
            }
            other => panic!("expected UnsupportedFormat, got {:?}", other.map(|s| s.format())),
        }
    }

    #[test]
    fn test_restricted_selector() {
        let selector = ReceiptSelector::empty().with(Box::new(JsonReceipt));
        assert!(selector.resolve("json").is_ok());
        assert!(matches!(
            selector.resolve("csv"),
            Err(CartError::UnsupportedFormat { .. })
        ));

        let selector = selector.with(Box::new(JsonReceipt));
        assert_eq!(selector.supported_formats(), vec!["json"]);
    }

    #[test]
    fn test_snapshot_iteration_order() {
        let mut cart = ShoppingCart::new();
        let apple1 = Item::from_f64("Apple", 1.00).unwrap();
        let banana = Item::from_f64("Banana", 0.50).unwrap();
        let apple2 = Item::from_f64("Apple", 1.00).unwrap();
        cart.add_item(apple1.clone());
        cart.add_item(banana.clone());
        cart.add_item(apple2.clone());

        let snapshot = cart.snapshot();
        let uids: Vec<_> = snapshot.items().map(Item::uid).collect();
        assert_eq!(uids, vec![apple1.uid(), apple2.uid(), banana.uid()]);
        assert_eq!(snapshot.total_price().to_fixed_2(), "2.50");
    }

    #[test]
    fn test_document_uses_unrounded_unit_price() {
        let mut cart = ShoppingCart::new();
        cart.add_item(Item::from_f64("Laptop", 999.9999).unwrap());

        let doc = ReceiptDocument::from_snapshot(&cart.snapshot());
        assert_eq!(doc.items[0].unit_price, 999.9999);
        assert_eq!(doc.total_price, 1000.0);
    }
}
