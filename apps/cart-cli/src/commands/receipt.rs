//! Build a cart from the command line and print its receipt.

use std::path::PathBuf;

use tracing::info;

use super::{build_catalog, fill_cart, remove_latest, ReceiptArgs};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::state::CartState;

/// A rendered receipt and where it was saved, if anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptOutput {
    pub content: String,
    pub saved_to: Option<PathBuf>,
}

/// Run the receipt command.
pub fn run(args: ReceiptArgs, config: &CliConfig) -> CliResult<()> {
    let output = build_receipt(&args, config)?;
    println!("{}", output.content);
    if let Some(path) = &output.saved_to {
        info!(path = %path.display(), "Receipt saved");
    }
    Ok(())
}

/// Fills a fresh cart, applies removals and renders the receipt.
///
/// ## Steps
/// 1. `--custom` templates join the built-in catalog
/// 2. Each ITEM adds one new instance
/// 3. Each `--remove` drops the newest instance of that name
/// 4. An empty cart is refused
/// 5. The receipt is rendered in `--format` (or the configured default)
///    and written to `--output` if given
pub fn build_receipt(args: &ReceiptArgs, config: &CliConfig) -> CliResult<ReceiptOutput> {
    let state = CartState::new();
    let catalog = build_catalog(&args.custom)?;
    fill_cart(&state, &catalog, &args.items)?;

    for name in &args.remove {
        state.with_cart_mut(|cart| remove_latest(cart, name))?;
    }

    if state.with_cart(|cart| cart.is_empty()) {
        return Err(CliError::empty_cart());
    }

    let format = args.format.as_deref().unwrap_or(config.default_format.name());
    let saved_to = args.output.as_deref().map(|path| config.resolve_output(path));

    let content = state.with_cart(|cart| cart.generate_receipt(format, saved_to.as_deref()))?;
    Ok(ReceiptOutput { content, saved_to })
}
