//! Base pricing

use crate::{
    cart::Cart,
    catalog::{Catalog, UnknownSkuError},
    prices::Price,
};

/// Calculates the undiscounted price of a cart from catalog unit prices.
///
/// An empty cart prices to [`Price::ZERO`].
///
/// # Errors
///
/// Returns an [`UnknownSkuError`] if any SKU in the cart has no catalog entry.
pub fn base_price(catalog: &Catalog, cart: &Cart) -> Result<Price, UnknownSkuError> {
    cart.iter()
        .try_fold(Price::ZERO, |acc, sku| Ok(acc + catalog.unit_price(sku)?))
}
