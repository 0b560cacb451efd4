//! # Money Module
//!
//! Provides the `Price` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A cart keeps a running total across many add/remove calls.            │
//! │  With f64 the total drifts away from the sum of what is in the cart.   │
//! │                                                                         │
//! │  OUR SOLUTION: Exact Decimals                                           │
//! │    Prices keep whatever precision the caller gave (999.9999 is fine)   │
//! │    Totals are exact sums; rounding happens only when reading them      │
//! │    Prices are capped at MAX_PRICE, so totals cannot overflow           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cart_core::money::Price;
//!
//! let price: Price = "10.99".parse().unwrap();
//! assert_eq!(price.to_string(), "$10.99");
//!
//! let total = price + "0.01".parse::<Price>().unwrap();
//! assert_eq!(total.to_fixed_2(), "11.00");
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{ValidationError, ValidationResult};
use crate::{MAX_PRICE, PRICE_DECIMAL_PLACES};

// =============================================================================
// Price Type
// =============================================================================

/// A non-negative monetary amount.
///
/// ## Design Decisions
/// - **Decimal, not f64**: sums are exact, so running totals never drift
/// - **Non-negative**: enforced by every constructor; subtraction is only
///   used by the cart to undo an earlier addition
/// - **Bounded**: at most [`MAX_PRICE`]; addition never overflows for any
///   cart that fits in memory
/// - **No currency**: prices are plain amounts, printed with a `$` prefix
///
/// ## Where Price is Used
/// ```text
/// Item.price ──┬──► ItemGroup.total_price ──► ShoppingCart.total_price
///              │
///              └──► Receipt "Unit Price" column (rounded to 2 places)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// Creates a price from an exact decimal.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::Price;
    /// use cart_core::Decimal;
    ///
    /// assert!(Price::new(Decimal::new(150, 2)).is_ok()); // 1.50
    /// assert!(Price::new(Decimal::new(-1, 0)).is_err());
    /// assert!(Price::new(Decimal::MAX).is_err());
    /// ```
    pub fn new(amount: Decimal) -> ValidationResult<Self> {
        if amount < Decimal::ZERO {
            return Err(ValidationError::Negative {
                field: "price".to_string(),
                value: amount.to_string(),
            });
        }
        if amount > Decimal::from(MAX_PRICE) {
            return Err(too_large());
        }
        Ok(Price(amount.normalize()))
    }

    /// The largest accepted price.
    #[inline]
    pub fn max() -> Self {
        Price(Decimal::from(MAX_PRICE))
    }

    /// Creates a price from whole cents.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::Price;
    ///
    /// assert_eq!(Price::from_cents(1099).to_string(), "$10.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: u32) -> Self {
        Price(Decimal::new(i64::from(cents), PRICE_DECIMAL_PLACES))
    }

    /// Creates a price from a float.
    ///
    /// The float is converted through its shortest round-trip text, so
    /// `0.1` becomes exactly `0.1` rather than its binary approximation.
    /// NaN and infinities are rejected as the wrong kind of value.
    /// Digits beyond the 28th decimal place are rounded away, so very
    /// small values become zero.
    pub fn from_f64(value: f64) -> ValidationResult<Self> {
        if !value.is_finite() {
            return Err(ValidationError::InvalidFormat {
                field: "price".to_string(),
                reason: format!("{value} is not a finite number"),
            });
        }
        if value > MAX_PRICE as f64 {
            return Err(too_large());
        }
        let amount = Decimal::from_str(&value.to_string()).map_err(|e| {
            ValidationError::InvalidFormat {
                field: "price".to_string(),
                reason: e.to_string(),
            }
        })?;
        Price::new(amount)
    }

    /// Returns zero.
    #[inline]
    pub const fn zero() -> Self {
        Price(Decimal::ZERO)
    }

    /// Returns the exact amount.
    #[inline]
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Rounds to two decimal places using Bankers Rounding.
    ///
    /// ## Bankers Rounding Explained
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  BANKERS ROUNDING (Round Half to Even)                              │
    /// │                                                                     │
    /// │  A tie rounds to the neighbour whose last digit is even:           │
    /// │    0.005 → 0.00    0.015 → 0.02    2.675 → 2.68    1.125 → 1.12   │
    /// │                                                                     │
    /// │  Because the amount is an exact decimal, 2.675 really is a tie.    │
    /// │  (As an f64 it is 2.67499999..., which is why floats disagree.)    │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// The result always carries exactly two decimal places.
    pub fn rounded(&self) -> Price {
        let mut amount = self
            .0
            .round_dp_with_strategy(PRICE_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven);
        amount.rescale(PRICE_DECIMAL_PLACES);
        Price(amount)
    }

    /// Formats the rounded amount with exactly two decimals, without symbol.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::Price;
    ///
    /// assert_eq!(Price::from_f64(0.5).unwrap().to_fixed_2(), "0.50");
    /// assert_eq!(Price::from_f64(999.9999).unwrap().to_fixed_2(), "1000.00");
    /// ```
    pub fn to_fixed_2(&self) -> String {
        self.rounded().0.to_string()
    }

    /// Returns the amount as a float, for JSON/YAML documents.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }
}

fn too_large() -> ValidationError {
    ValidationError::TooLarge {
        field: "price".to_string(),
        max: MAX_PRICE.to_string(),
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the price as `$x.yy`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.to_fixed_2())
    }
}

/// Parses user-entered text such as `"1.50"` or `" 2 "`.
impl FromStr for Price {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Required {
                field: "price".to_string(),
            });
        }
        let amount = Decimal::from_str(s).map_err(|_| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: format!("'{s}' is not a number"),
        })?;
        Price::new(amount)
    }
}

impl Add for Price {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Price(self.0 + other.0)
    }
}

impl AddAssign for Price {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Only used to undo an earlier addition, so the result stays non-negative.
impl Sub for Price {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Price(self.0 - other.0)
    }
}

impl SubAssign for Price {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::zero(), |acc, p| acc + p)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
