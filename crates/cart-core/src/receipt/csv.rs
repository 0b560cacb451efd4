//! CSV receipt.
//!
//! Fields are joined with commas as-is; nothing is quoted, so a comma
//! inside an item name shifts that row's columns.

use super::{ReceiptFormat, ReceiptSnapshot, ReceiptStrategy};
use crate::error::CartResult;

const HEADER: &str = "UID,Name,Unit Price";

/// Comma-separated receipt with a trailing total row.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvReceipt;

impl ReceiptStrategy for CsvReceipt {
    fn format(&self) -> ReceiptFormat {
        ReceiptFormat::Csv
    }

    fn render(&self, snapshot: &ReceiptSnapshot<'_>) -> CartResult<String> {
        let mut rows = vec![HEADER.to_string()];

        rows.extend(snapshot.items().map(|item| {
            [
                item.uid().to_string(),
                item.name().to_string(),
                item.price().to_fixed_2(),
            ]
            .join(",")
        }));

        rows.push(format!("Total Price,,{}", snapshot.total_price().to_fixed_2()));

        Ok(rows.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Item, ShoppingCart};

    #[test]
    fn test_csv_rows() {
        let mut cart = ShoppingCart::new();
        let apple = Item::from_f64("Apple", 1.0).unwrap();
        let laptop = Item::from_f64("Laptop", 999.9999).unwrap();
        cart.add_item(apple.clone());
        cart.add_item(laptop.clone());

        let receipt = CsvReceipt.render(&cart.snapshot()).unwrap();
        let rows: Vec<&str> = receipt.split('\n').collect();

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], "UID,Name,Unit Price");
        assert_eq!(rows[1], format!("{},Apple,1.00", apple.uid()));
        assert_eq!(rows[2], format!("{},Laptop,1000.00", laptop.uid()));
        assert_eq!(rows[3], "Total Price,,1001.00");
    }

    #[test]
    fn test_names_are_not_quoted() {
        let mut cart = ShoppingCart::new();
        cart.add_item(Item::from_f64("Salt, coarse", 0.75).unwrap());

        let receipt = CsvReceipt.render(&cart.snapshot()).unwrap();
        assert!(receipt.contains(",Salt, coarse,0.75"));
    }
}
