//! Cart line quantity, always within `[Quantity::MIN, Quantity::MAX]`.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Number of units of a product in a cart line.
///
/// The only way to build a `Quantity` is by clamping, so every value in the
/// program satisfies `1 <= quantity <= 10`. Stored values outside that range
/// are clamped on deserialization.
///
/// ```
/// use shopfront_core::Quantity;
///
/// assert_eq!(Quantity::clamped(0).get(), 1);
/// assert_eq!(Quantity::clamped(42).get(), 10);
/// assert_eq!(Quantity::clamped(3).saturating_add(9).get(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// Smallest quantity a cart line can hold.
    pub const MIN: Self = Self(1);
    /// Largest quantity a cart line can hold.
    pub const MAX: Self = Self(10);

    /// Clamp any integer into the valid range.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        let v = value.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0));
        // In range after the clamp above.
        Self(u32::try_from(v).unwrap_or(Self::MIN.0))
    }

    /// Get the quantity as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Add `extra` units, saturating at [`Quantity::MAX`].
    #[must_use]
    pub fn saturating_add(self, extra: u32) -> Self {
        Self::clamped(i64::from(self.0) + i64::from(extra))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::MIN
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_range() {
        for raw in [-100, -1, 0, 1, 5, 10, 11, 1_000, i64::MAX, i64::MIN] {
            let q = Quantity::clamped(raw).get();
            assert!((1..=10).contains(&q), "{raw} -> {q}");
        }
    }

    #[test]
    fn test_clamped_keeps_in_range_values() {
        assert_eq!(Quantity::clamped(7).get(), 7);
    }

    #[test]
    fn test_saturating_add() {
        assert_eq!(Quantity::clamped(2).saturating_add(1).get(), 3);
        assert_eq!(Quantity::MAX.saturating_add(1), Quantity::MAX);
        assert_eq!(Quantity::clamped(9).saturating_add(u32::MAX), Quantity::MAX);
    }

    #[test]
    fn test_deserialize_clamps() {
        let q: Quantity = serde_json::from_str("25").unwrap();
        assert_eq!(q, Quantity::MAX);

        let q: Quantity = serde_json::from_str("-4").unwrap();
        assert_eq!(q, Quantity::MIN);
    }

    #[test]
    fn test_serialize_plain_integer() {
        assert_eq!(serde_json::to_string(&Quantity::clamped(4)).unwrap(), "4");
    }
}
