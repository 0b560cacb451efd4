//! # Commands Module
//!
//! Every `shopcart` subcommand.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (arguments, shared helpers)
//! ├── catalog.rs  ◄─── List item templates
//! ├── receipt.rs  ◄─── Build a cart and print its receipt
//! └── summary.rs  ◄─── Build a cart and print its totals
//! ```
//!
//! ## Building a Cart From Arguments
//! ```text
//! --custom Widget=3.99   ──► Catalog::add_template
//!         │
//!         ▼
//! Apple Apple Widget     ──► template.instantiate() ──► cart.add_item
//!         │
//!         ▼
//! --remove Apple         ──► newest Apple instance  ──► cart.remove_item
//! ```

pub mod catalog;
pub mod receipt;
pub mod summary;

use std::path::PathBuf;

use cart_core::{Catalog, Item, ShoppingCart};
use clap::Args;
use tracing::debug;

use crate::error::{CliError, CliResult};
use crate::state::CartState;

/// Arguments for the catalog command.
#[derive(Args, Debug, Default)]
pub struct CatalogArgs {
    /// Extra template as NAME=PRICE (repeatable).
    #[arg(long = "custom", value_name = "NAME=PRICE")]
    pub custom: Vec<String>,
}

/// Arguments for the receipt command.
#[derive(Args, Debug, Default)]
pub struct ReceiptArgs {
    /// Catalog item names to add; repeat a name for several instances.
    #[arg(value_name = "ITEM")]
    pub items: Vec<String>,

    /// Extra template as NAME=PRICE (repeatable).
    #[arg(long = "custom", value_name = "NAME=PRICE")]
    pub custom: Vec<String>,

    /// Remove the most recently added instance of NAME (repeatable).
    #[arg(long = "remove", value_name = "NAME")]
    pub remove: Vec<String>,

    /// Receipt format: csv, text, json or yaml.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Also save the receipt to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the summary command.
#[derive(Args, Debug, Default)]
pub struct SummaryArgs {
    /// Catalog item names to add; repeat a name for several instances.
    #[arg(value_name = "ITEM")]
    pub items: Vec<String>,

    /// Extra template as NAME=PRICE (repeatable).
    #[arg(long = "custom", value_name = "NAME=PRICE")]
    pub custom: Vec<String>,
}

// =============================================================================
// Shared Helpers
// =============================================================================

/// Splits `NAME=PRICE` at the last `=`.
pub fn parse_custom(pair: &str) -> CliResult<(&str, &str)> {
    pair.rsplit_once('=').ok_or_else(|| {
        CliError::validation(format!("Expected NAME=PRICE, got '{}'", pair))
    })
}

/// The built-in catalog plus every `--custom` template.
pub fn build_catalog(custom: &[String]) -> CliResult<Catalog> {
    let mut catalog = Catalog::builtin();
    for pair in custom {
        let (name, price) = parse_custom(pair)?;
        let template = catalog.add_template(name, price)?;
        debug!(name = %template.name(), price = %template.price(), "Custom template added");
    }
    Ok(catalog)
}

/// Adds one fresh instance per name, in order.
///
/// Nothing is added unless every name is in the catalog.
pub fn fill_cart(state: &CartState, catalog: &Catalog, names: &[String]) -> CliResult<()> {
    let items = names
        .iter()
        .map(|name| {
            catalog
                .get(name)
                .map(|template| template.instantiate())
                .ok_or_else(|| CliError::not_found("Catalog item", name))
        })
        .collect::<CliResult<Vec<Item>>>()?;

    state.with_cart_mut(|cart| {
        for item in items {
            cart.add_item(item);
        }
    });
    Ok(())
}

/// Removes the newest instance of `name`.
pub fn remove_latest(cart: &mut ShoppingCart, name: &str) -> CliResult<Item> {
    let latest = cart
        .list_items_by_name(name)?
        .pop()
        .ok_or_else(|| CliError::not_found("Item", name))?;
    Ok(cart.remove_item(&latest)?)
}
