//! Individual promotion
//!
//! A flat price for every full group of N occurrences of a single SKU

use crate::{cart::Cart, catalog::Sku, prices::Price, promotions::PromotionError};

/// A multibuy promotion on one SKU: every `quantity` occurrences sell for a
/// flat `price` instead of `quantity` unit prices.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IndividualPromotion {
    quantity: usize,
    sku: Sku,
    price: Price,
}

impl IndividualPromotion {
    /// Create a new individual promotion.
    ///
    /// # Errors
    ///
    /// Returns [`PromotionError::ZeroGroupSize`] if `quantity` is zero.
    pub fn new(quantity: usize, sku: Sku, price: Price) -> Result<Self, PromotionError> {
        if quantity == 0 {
            return Err(PromotionError::ZeroGroupSize);
        }

        Ok(IndividualPromotion {
            quantity,
            sku,
            price,
        })
    }

    /// Return the group size.
    pub fn quantity(&self) -> usize {
        self.quantity
    }

    /// Return the discounted SKU.
    pub fn sku(&self) -> Sku {
        self.sku
    }

    /// Return the flat price of one full group.
    pub fn price(&self) -> Price {
        self.price
    }

    /// Return whether the cart currently holds at least one full group.
    pub fn is_applicable(&self, cart: &Cart) -> bool {
        cart.count_of(self.sku) >= self.quantity
    }

    /// Remove every full group of the SKU from the cart and return the flat
    /// price charged for the removed groups.
    ///
    /// Only the count matters, not adjacency: `floor(count / quantity)`
    /// groups are taken from the leftmost occurrences, and
    /// `count % quantity` occurrences stay behind for base pricing.
    pub fn apply(&self, cart: &mut Cart) -> Price {
        let groups = cart.count_of(self.sku) / self.quantity;

        cart.remove_first_n(self.sku, groups * self.quantity);

        self.price * groups
    }
}
