//! # Error Types
//!
//! Domain-specific error types for cart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cart-core errors (this file)                                          │
//! │  ├── CartError        - Lookup, format and receipt I/O failures        │
//! │  └── ValidationError  - Malformed Item / Price / template input        │
//! │                                                                         │
//! │  cart-cli errors (app)                                                 │
//! │  └── CliError         - What the terminal user sees (with a code)      │
//! │                                                                         │
//! │  Flow: ValidationError → CartError → CliError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item name, UID, path)
//! 3. Errors are enum variants, never String
//!
//! Passing something that is not an [`Item`](crate::Item) to the cart is a
//! compile error, so there is no runtime "type error" variant.

use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// Errors raised by the cart and its receipt strategies.
#[derive(Debug, Error)]
pub enum CartError {
    /// No group exists for the requested item name.
    #[error("Item '{name}' not found in the cart")]
    ItemNotFound { name: String },

    /// The group exists but holds no instance with the requested UID.
    ///
    /// ## When This Occurs
    /// - Removing an item that was never added (same name, other instance)
    /// - Looking up a UID that was already removed
    /// - Looking up with text that is not a UUID at all
    #[error("Item '{name}' with UID '{uid}' not found in the cart")]
    InstanceNotFound { name: String, uid: String },

    /// The requested receipt format is not registered.
    #[error("Unsupported format '{requested}'. Supported formats are: {supported:?}")]
    UnsupportedFormat {
        requested: String,
        supported: Vec<String>,
    },

    /// Writing the receipt to disk failed.
    ///
    /// ## When This Occurs
    /// - Parent directory is missing
    /// - Permission denied
    /// - Disk full
    #[error("Unable to write to file: {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A structured receipt could not be serialized.
    #[error("Failed to encode {format} receipt: {reason}")]
    Encode { format: String, reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CartError {
    /// Returns true for the two lookup-miss variants.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CartError::ItemNotFound { .. } | CartError::InstanceNotFound { .. }
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while constructing items, prices and catalog templates, before
/// anything reaches the cart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value is of the wrong kind (NaN, infinity, unparseable text).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value must not be negative.
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: String, value: String },

    /// Value is above the accepted maximum.
    #[error("{field} must be at most {max}")]
    TooLarge { field: String, max: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Duplicate value (e.g., duplicate template name).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
