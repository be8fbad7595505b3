//! Prices

use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Deref, Mul},
};

/// Represents a price in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price {
    value: u64,
}

impl Price {
    /// A price of zero minor units.
    pub const ZERO: Price = Price { value: 0 };

    /// Creates a new Price
    pub const fn new(value: u64) -> Self {
        Price { value }
    }

    /// Subtracts `other` from this price, returning `None` on underflow.
    pub fn checked_sub(self, other: Price) -> Option<Price> {
        self.value.checked_sub(other.value).map(Price::new)
    }
}

impl Deref for Price {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price::new(self.value + rhs.value)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Price) {
        self.value += rhs.value;
    }
}

impl Mul<usize> for Price {
    type Output = Price;

    fn mul(self, rhs: usize) -> Price {
        Price::new(self.value * u64::try_from(rhs).unwrap_or(u64::MAX))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
