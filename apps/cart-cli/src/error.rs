//! # CLI Error Type
//!
//! Unified error type for `shopcart` commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in shopcart                               │
//! │                                                                         │
//! │  Command Function                                                       │
//! │  Result<T, CliError>                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Bad NAME=PRICE? ──── ValidationError::InvalidFormat ──┐                │
//! │         │                                              │                │
//! │         ▼                                              ▼                │
//! │  Cart lookup miss? ── CartError::ItemNotFound ───── CliError ──► main   │
//! │         │                                                      │        │
//! │         ▼                                                      ▼        │
//! │  Success ──► stdout                          stderr (text or --json)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! With `--json` the error is printed as:
//! ```json
//! {
//!   "code": "EMPTY_CART",
//!   "message": "Your cart is empty."
//! }
//! ```

use std::fmt;

use cart_core::{CartError, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// Error returned from every command.
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code}] {message}")]
pub struct CliError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Item name or instance not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Receipt format is not registered
    UnsupportedFormat,

    /// Receipt file could not be written
    IoError,

    /// Nothing to print a receipt for
    EmptyCart,

    /// Anything else
    Internal,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::UnsupportedFormat => "UNSUPPORTED_FORMAT",
            ErrorCode::IoError => "IO_ERROR",
            ErrorCode::EmptyCart => "EMPTY_CART",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CliError {
    /// Creates a new CLI error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        CliError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::ValidationError, message)
    }

    /// The refusal shown when a receipt is requested for an empty cart.
    pub fn empty_cart() -> Self {
        CliError::new(ErrorCode::EmptyCart, "Your cart is empty.")
    }

    /// Serializes the error for `--json` output.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.to_string())
    }
}

/// Converts cart errors to CLI errors.
impl From<CartError> for CliError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::ItemNotFound { .. } | CartError::InstanceNotFound { .. } => {
                CliError::new(ErrorCode::NotFound, err.to_string())
            }
            CartError::UnsupportedFormat { .. } => {
                CliError::new(ErrorCode::UnsupportedFormat, err.to_string())
            }
            CartError::Io { ref source, .. } => {
                CliError::new(ErrorCode::IoError, format!("{}: {}", err, source))
            }
            CartError::Encode { .. } => {
                tracing::error!("Receipt encoding failed: {}", err);
                CliError::new(ErrorCode::Internal, err.to_string())
            }
            CartError::Validation(e) => CliError::from(e),
        }
    }
}

/// Converts validation errors to CLI errors.
impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::validation(err.to_string())
    }
}

/// Result type for commands.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cart_error_codes() {
        let err = CliError::from(CartError::ItemNotFound {
            name: "Kiwi".to_string(),
        });
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(err.message.contains("Kiwi"));

        let err = CliError::from(CartError::UnsupportedFormat {
            requested: "xml".to_string(),
            supported: vec!["csv".to_string()],
        });
        assert_eq!(err.code, ErrorCode::UnsupportedFormat);

        let err = CliError::from(CartError::Validation(ValidationError::Required {
            field: "name".to_string(),
        }));
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_io_error_keeps_cause() {
        let err = CliError::from(CartError::Io {
            path: PathBuf::from("/nope/receipt.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        });
        assert_eq!(err.code, ErrorCode::IoError);
        assert!(err.message.contains("/nope/receipt.txt"));
        assert!(err.message.contains("no such directory"));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            CliError::empty_cart().to_string(),
            "[EMPTY_CART] Your cart is empty."
        );
    }

    #[test]
    fn test_json_shape() {
        let value: serde_json::Value =
            serde_json::from_str(&CliError::not_found("Catalog item", "Kiwi").to_json()).unwrap();
        assert_eq!(value["code"], "NOT_FOUND");
        assert_eq!(value["message"], "Catalog item not found: Kiwi");
    }
}
