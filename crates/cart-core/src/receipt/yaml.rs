//! YAML receipt in block style.

use super::{ReceiptDocument, ReceiptFormat, ReceiptSnapshot, ReceiptStrategy};
use crate::error::{CartError, CartResult};

/// Structured receipt as a YAML mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlReceipt;

impl ReceiptStrategy for YamlReceipt {
    fn format(&self) -> ReceiptFormat {
        ReceiptFormat::Yaml
    }

    fn render(&self, snapshot: &ReceiptSnapshot<'_>) -> CartResult<String> {
        let document = ReceiptDocument::from_snapshot(snapshot);
        serde_yaml::to_string(&document).map_err(|e| CartError::Encode {
            format: ReceiptFormat::Yaml.name().to_string(),
            reason: e.to_string(),
        })
    }
}
