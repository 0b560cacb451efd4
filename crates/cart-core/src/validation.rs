//! # Validation Module
//!
//! Input validation for item names, template prices and identifiers.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front-end (CLI argument parsing)                             │
//! │  └── NAME=PRICE splitting, immediate user feedback                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Construction (THIS MODULE)                                   │
//! │  ├── Item: non-empty name, non-negative price                          │
//! │  └── Template: non-empty name, strictly positive price                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart                                                         │
//! │  └── Only ever sees valid, immutable Items                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use uuid::Uuid;

use crate::error::{ValidationError, ValidationResult};
use crate::money::Price;
use crate::MAX_ITEM_NAME_LEN;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty or whitespace only
/// - At most [`MAX_ITEM_NAME_LEN`] characters
///
/// ## Example
/// ```rust
/// use cart_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Eggs (Dozen)").is_ok());
/// assert!(validate_item_name("").is_err());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a catalog template price.
///
/// Items may be free; catalog templates must cost more than zero.
pub fn validate_template_price(price: Price) -> ValidationResult<()> {
    if price.is_zero() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Identifier Parsing
// =============================================================================

/// Parses an item UID given as text.
///
/// Accepts every textual form the `uuid` crate understands (hyphenated,
/// simple, braced, upper case), so lookups compare typed values instead of
/// one particular string rendering.
///
/// ## Example
/// ```rust
/// use cart_core::validation::parse_uid;
///
/// assert!(parse_uid("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(parse_uid("550E8400E29B41D4A716446655440000").is_ok());
/// assert!(parse_uid("not-a-uuid").is_err());
/// ```
pub fn parse_uid(uid: &str) -> ValidationResult<Uuid> {
    if uid.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "uid".to_string(),
        });
    }

    Uuid::parse_str(uid.trim()).map_err(|_| ValidationError::InvalidFormat {
        field: "uid".to_string(),
        reason: "must be a valid UUID".to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
