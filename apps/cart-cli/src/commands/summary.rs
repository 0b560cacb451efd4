//! Print cart totals without rendering a receipt.

use tracing::info;

use super::{build_catalog, fill_cart, SummaryArgs};
use crate::error::{CliError, CliResult, ErrorCode};
use crate::state::{CartState, CartSummary};

/// Run the summary command.
pub fn run(args: SummaryArgs, json: bool) -> CliResult<()> {
    let state = CartState::new();
    let catalog = build_catalog(&args.custom)?;
    fill_cart(&state, &catalog, &args.items)?;

    let summary = state.summary();
    info!(
        items = summary.total_quantity,
        total = %summary.total_price,
        "Cart summarised"
    );

    if json {
        let text = serde_json::to_string_pretty(&summary)
            .map_err(|e| CliError::new(ErrorCode::Internal, e.to_string()))?;
        println!("{}", text);
    } else {
        println!("{}", render(&summary));
    }
    Ok(())
}

/// Plain-text summary.
///
/// ```text
/// Apple x2 - $2.00
/// Banana x1 - $0.50
/// Total Quantity: 3
/// Total Price: $2.50
/// ```
pub fn render(summary: &CartSummary) -> String {
    let mut lines: Vec<String> = summary
        .groups
        .iter()
        .map(|group| format!("{} x{} - ${}", group.name, group.quantity, group.total_price))
        .collect();
    lines.push(format!("Total Quantity: {}", summary.total_quantity));
    lines.push(format!("Total Price: ${}", summary.total_price));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart_core::Catalog;

    #[test]
    fn test_render() {
        let state = CartState::new();
        let names: Vec<String> = ["Apple", "Banana", "Apple"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        fill_cart(&state, &Catalog::builtin(), &names).unwrap();

        assert_eq!(
            render(&state.summary()),
            "Apple x2 - $2.00\nBanana x1 - $0.50\nTotal Quantity: 3\nTotal Price: $2.50"
        );
    }

    #[test]
    fn test_render_empty() {
        let state = CartState::new();
        assert_eq!(
            render(&state.summary()),
            "Total Quantity: 0\nTotal Price: $0.00"
        );
    }
}
