//! Integer tick prices.
//!
//! The simulated exchange quotes every instrument on an integer tick grid,
//! so prices are plain `i64` ticks. Values that can fall between ticks
//! (mid prices, fair values) are carried as exact `Decimal`s instead.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Price in integer ticks.
///
/// Wraps `i64` to keep prices from being mixed up with sizes and
/// positions, which are also integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub i64);

impl Price {
    #[inline]
    pub fn new(ticks: i64) -> Self {
        Self(ticks)
    }

    #[inline]
    pub fn ticks(&self) -> i64 {
        self.0
    }

    /// Exact decimal view of this price.
    #[inline]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::from(self.0)
    }

    /// Midpoint of two prices, exact (may land on a half tick).
    #[inline]
    pub fn midpoint(a: Price, b: Price) -> Decimal {
        (a.to_decimal() + b.to_decimal()) / Decimal::TWO
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Price {
    fn from(ticks: i64) -> Self {
        Self(ticks)
    }
}

/// Shift a price by a number of ticks.
impl Add<i64> for Price {
    type Output = Self;

    fn add(self, rhs: i64) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl Sub<i64> for Price {
    type Output = Self;

    fn sub(self, rhs: i64) -> Self::Output {
        Self(self.0 - rhs)
    }
}

/// Distance between two prices in ticks.
impl Sub for Price {
    type Output = i64;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_tick_shift() {
        let p = Price::new(100);
        assert_eq!(p + 8, Price::new(108));
        assert_eq!(p - 1, Price::new(99));
    }

    #[test]
    fn test_price_distance() {
        assert_eq!(Price::new(102) - Price::new(100), 2);
        assert_eq!(Price::new(100) - Price::new(102), -2);
    }

    #[test]
    fn test_midpoint_half_tick() {
        assert_eq!(Price::midpoint(Price::new(100), Price::new(101)), dec!(100.5));
        assert_eq!(Price::midpoint(Price::new(100), Price::new(102)), dec!(101));
    }
}
