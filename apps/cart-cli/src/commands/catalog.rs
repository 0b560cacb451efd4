//! List the item templates a cart can be filled from.

use cart_core::Catalog;
use tracing::info;

use super::{build_catalog, CatalogArgs};
use crate::error::CliResult;

/// Run the catalog command.
pub fn run(args: CatalogArgs) -> CliResult<()> {
    let catalog = build_catalog(&args.custom)?;
    info!(templates = catalog.len(), "Catalog loaded");
    println!("{}", render(&catalog));
    Ok(())
}

/// One `<name> - $<price>` line per template, in catalog order.
pub fn render(catalog: &Catalog) -> String {
    catalog
        .templates()
        .iter()
        .map(|template| format!("{} - {}", template.name(), template.price()))
        .collect::<Vec<_>>()
        .join("\n")
}
