//! Promotions

use std::fmt;

use thiserror::Error;

use crate::{
    cart::Cart,
    catalog::Sku,
    prices::Price,
    promotions::{combined::CombinedPromotion, individual::IndividualPromotion},
};

pub mod combined;
pub mod individual;

/// Errors from promotion construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromotionError {
    /// The group size of an individual promotion was zero.
    #[error("promotion group size must be at least 1")]
    ZeroGroupSize,

    /// Both sides of a combined promotion named the same SKU.
    #[error("combined promotion requires two distinct SKUs, got '{0}' twice")]
    IdenticalSkus(Sku),
}

/// Promotion enum
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Promotion {
    /// Flat price for every full group of N occurrences of one SKU
    Individual(IndividualPromotion),

    /// Flat price for each pairing of two different SKUs
    Combined(CombinedPromotion),
}

impl Promotion {
    /// Create an individual promotion.
    ///
    /// # Errors
    ///
    /// Returns [`PromotionError::ZeroGroupSize`] if `quantity` is zero.
    pub fn individual(quantity: usize, sku: Sku, price: Price) -> Result<Self, PromotionError> {
        Ok(Promotion::Individual(IndividualPromotion::new(
            quantity, sku, price,
        )?))
    }

    /// Create a combined promotion.
    ///
    /// # Errors
    ///
    /// Returns [`PromotionError::IdenticalSkus`] if both sides name the same
    /// SKU.
    pub fn combined(first: Sku, second: Sku, price: Price) -> Result<Self, PromotionError> {
        Ok(Promotion::Combined(CombinedPromotion::new(
            first, second, price,
        )?))
    }

    /// Return whether this promotion would currently remove anything from
    /// the given cart.
    pub fn is_applicable(&self, cart: &Cart) -> bool {
        match self {
            Promotion::Individual(individual) => individual.is_applicable(cart),
            Promotion::Combined(combined) => combined.is_applicable(cart),
        }
    }

    /// Apply this promotion to the cart, removing the items it discounts and
    /// returning the discount revenue.
    ///
    /// Applying again once no further matches remain returns [`Price::ZERO`]
    /// and leaves the cart untouched.
    pub fn apply(&self, cart: &mut Cart) -> Price {
        match self {
            Promotion::Individual(individual) => individual.apply(cart),
            Promotion::Combined(combined) => combined.apply(cart),
        }
    }
}

impl fmt::Display for Promotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Promotion::Individual(individual) => write!(
                f,
                "{} × {} for {}",
                individual.quantity(),
                individual.sku(),
                individual.price()
            ),
            Promotion::Combined(combined) => write!(
                f,
                "{} + {} for {}",
                combined.first(),
                combined.second(),
                combined.price()
            ),
        }
    }
}
