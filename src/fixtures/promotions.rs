//! Promotion Fixtures

use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, parse_sku},
    prices::Price,
    promotions::Promotion,
};

/// Promotions Fixture
///
/// The promotions are kept as a sequence because their file order is the
/// order they will be applied in.
#[derive(Debug, Deserialize)]
pub struct PromotionsFixture {
    /// Promotion definitions, in application order
    pub promotions: Vec<PromotionFixture>,
}

/// A single promotion definition
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PromotionFixture {
    /// A multi-buy deal on one SKU
    Individual {
        /// Number of units per discounted group
        quantity: usize,

        /// The SKU the deal applies to
        sku: String,

        /// Price charged per complete group
        price: u64,
    },

    /// A pairing deal across two SKUs
    Combined {
        /// One side of the pair
        first: String,

        /// The other side of the pair
        second: String,

        /// Price charged per complete pair
        price: u64,
    },
}

impl PromotionFixture {
    /// Convert the fixture into a [`Promotion`]
    ///
    /// # Errors
    ///
    /// Returns an error if a SKU entry is not a single character, or if
    /// the promotion parameters fail validation.
    pub fn try_into_promotion(self) -> Result<Promotion, FixtureError> {
        match self {
            Self::Individual {
                quantity,
                sku,
                price,
            } => {
                let sku = parse_sku(&sku)?;

                Ok(Promotion::individual(quantity, sku, Price::new(price))?)
            }
            Self::Combined {
                first,
                second,
                price,
            } => {
                let first = parse_sku(&first)?;
                let second = parse_sku(&second)?;

                Ok(Promotion::combined(first, second, Price::new(price))?)
            }
        }
    }
}
