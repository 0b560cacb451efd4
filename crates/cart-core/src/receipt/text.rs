//! Plain text receipt.
//!
//! ```text
//! Receipt:
//! --------
//! UID: 5f0c… | Name: Apple | Unit Price: $1.00
//! UID: 9b2d… | Name: Banana | Unit Price: $0.50
//! --------
//! Total Price: $1.50
//! ```

use super::{ReceiptFormat, ReceiptSnapshot, ReceiptStrategy};
use crate::error::CartResult;

const SEPARATOR: &str = "--------";

/// Human-readable receipt, one line per item instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReceipt;

impl ReceiptStrategy for TextReceipt {
    fn format(&self) -> ReceiptFormat {
        ReceiptFormat::Text
    }

    fn render(&self, snapshot: &ReceiptSnapshot<'_>) -> CartResult<String> {
        let mut lines = vec!["Receipt:".to_string(), SEPARATOR.to_string()];

        lines.extend(snapshot.items().map(|item| {
            format!(
                "UID: {} | Name: {} | Unit Price: {}",
                item.uid(),
                item.name(),
                item.price()
            )
        }));

        lines.push(SEPARATOR.to_string());
        lines.push(format!("Total Price: {}", snapshot.total_price()));

        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Item, ShoppingCart};

    #[test]
    fn test_text_layout() {
        let mut cart = ShoppingCart::new();
        let apple = Item::from_f64("Apple", 1.0).unwrap();
        let banana = Item::from_f64("Banana", 0.5).unwrap();
        cart.add_item(apple.clone());
        cart.add_item(banana.clone());

        let receipt = TextReceipt.render(&cart.snapshot()).unwrap();
        let expected = format!(
            "Receipt:\n--------\n\
             UID: {} | Name: Apple | Unit Price: $1.00\n\
             UID: {} | Name: Banana | Unit Price: $0.50\n\
             --------\n\
             Total Price: $1.50",
            apple.uid(),
            banana.uid()
        );
        assert_eq!(receipt, expected);
    }

    #[test]
    fn test_empty_cart() {
        let cart = ShoppingCart::new();
        let receipt = TextReceipt.render(&cart.snapshot()).unwrap();
        assert_eq!(receipt, "Receipt:\n--------\n--------\nTotal Price: $0.00");
    }
}
