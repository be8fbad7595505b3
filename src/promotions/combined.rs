//! Combined promotion
//!
//! A flat price for each pairing of one occurrence of two different SKUs

use crate::{cart::Cart, catalog::Sku, prices::Price, promotions::PromotionError};

/// A bundle promotion across two SKUs: each pairing of one `first` with one
/// `second` sells for a flat `price` instead of the two unit prices.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CombinedPromotion {
    first: Sku,
    second: Sku,
    price: Price,
}

impl CombinedPromotion {
    /// Create a new combined promotion.
    ///
    /// # Errors
    ///
    /// Returns [`PromotionError::IdenticalSkus`] if both sides name the same
    /// SKU.
    pub fn new(first: Sku, second: Sku, price: Price) -> Result<Self, PromotionError> {
        if first == second {
            return Err(PromotionError::IdenticalSkus(first));
        }

        Ok(CombinedPromotion {
            first,
            second,
            price,
        })
    }

    /// Return one side of the pairing.
    pub fn first(&self) -> Sku {
        self.first
    }

    /// Return the other side of the pairing.
    pub fn second(&self) -> Sku {
        self.second
    }

    /// Return the flat price of one pair.
    pub fn price(&self) -> Price {
        self.price
    }

    /// Return whether the cart currently holds at least one complete pair.
    pub fn is_applicable(&self, cart: &Cart) -> bool {
        cart.count_of(self.first) > 0 && cart.count_of(self.second) > 0
    }

    /// Remove every complete pairing from the cart and return the flat price
    /// charged for the removed pairs.
    ///
    /// `min(count(first), count(second))` pairs are taken from the leftmost
    /// occurrences of each side; the surplus of the more frequent SKU stays
    /// behind for base pricing. The two sides are symmetric.
    pub fn apply(&self, cart: &mut Cart) -> Price {
        let pairs = cart.count_of(self.first).min(cart.count_of(self.second));

        cart.remove_first_n(self.first, pairs);
        cart.remove_first_n(self.second, pairs);

        self.price * pairs
    }
}
