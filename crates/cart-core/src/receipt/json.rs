//! JSON receipt, pretty printed with four-space indentation.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::{ReceiptDocument, ReceiptFormat, ReceiptSnapshot, ReceiptStrategy};
use crate::error::{CartError, CartResult};

/// Structured receipt as a JSON object.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReceipt;

impl ReceiptStrategy for JsonReceipt {
    fn format(&self) -> ReceiptFormat {
        ReceiptFormat::Json
    }

    fn render(&self, snapshot: &ReceiptSnapshot<'_>) -> CartResult<String> {
        let document = ReceiptDocument::from_snapshot(snapshot);

        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        document
            .serialize(&mut serializer)
            .map_err(|e| encode_error(e.to_string()))?;

        String::from_utf8(buf).map_err(|e| encode_error(e.to_string()))
    }
}

fn encode_error(reason: String) -> CartError {
    CartError::Encode {
        format: ReceiptFormat::Json.name().to_string(),
        reason,
    }
}
