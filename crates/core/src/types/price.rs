//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are non-negative amounts in the store currency's standard unit
//! (dollars, not cents), capped at [`Price::MAX`]. They serialize as decimal
//! strings (`"89.99"`) and deserialize from either strings or JSON numbers,
//! so state exported by older clients that stored plain numbers still loads.
//!
//! Arithmetic saturates at [`Price::MAX`] instead of overflowing.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::quantity::Quantity;

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),

    /// The amount is above [`Price::MAX`].
    #[error("price exceeds maximum of {max}: {0}", max = Price::MAX.0)]
    TooLarge(Decimal),
}

/// A non-negative monetary amount.
///
/// ## Examples
///
/// ```
/// use shopfront_core::{Price, Quantity};
///
/// let unit = Price::from_whole(89);
/// let line = unit * Quantity::clamped(3);
/// assert_eq!(line, Price::from_whole(267));
/// assert_eq!(line.to_string(), "$267.00");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Largest accepted price (one billion).
    pub const MAX: Self = Self(Decimal::from_parts(1_000_000_000, 0, 0, false, 0));

    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero and
    /// [`PriceError::TooLarge`] if it is above [`Price::MAX`].
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        if amount > Self::MAX.0 {
            return Err(PriceError::TooLarge(amount));
        }
        Ok(Self(amount))
    }

    /// Create a price from a whole number of dollars.
    #[must_use]
    pub fn from_whole(dollars: u32) -> Self {
        Self(Decimal::from(dollars))
    }

    /// Create a price from a number of cents.
    #[must_use]
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), 2))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Multiply by a non-negative rate (e.g. `0.08` for 8% tax) and round to
    /// cents, midpoint away from zero.
    ///
    /// Negative rates yield zero.
    #[must_use]
    pub fn scaled(&self, rate: Decimal) -> Self {
        if rate.is_sign_negative() {
            return Self::ZERO;
        }
        self.0.checked_mul(rate).map_or(Self::MAX, |amount| {
            Self::saturating(
                amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            )
        })
    }

    /// Subtract, flooring the result at zero.
    #[must_use]
    pub fn saturating_sub(self, other: Self) -> Self {
        if other.0 >= self.0 {
            Self::ZERO
        } else {
            Self(self.0 - other.0)
        }
    }

    fn saturating(amount: Decimal) -> Self {
        Self(amount.min(Self::MAX.0))
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.0.checked_add(rhs.0).map_or(Self::MAX, Self::saturating)
    }
}

impl Mul<Quantity> for Price {
    type Output = Self;

    fn mul(self, rhs: Quantity) -> Self::Output {
        self.0
            .checked_mul(Decimal::from(rhs.get()))
            .map_or(Self::MAX, Self::saturating)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
