//! Checkout

use smallvec::SmallVec;

use crate::{
    cart::Cart,
    catalog::{Catalog, UnknownSkuError},
    prices::Price,
    pricing::base_price,
    promotions::Promotion,
};

/// One promotion's share of a checkout total.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PromotionCharge {
    /// The promotion that was applied.
    pub promotion: Promotion,

    /// The discount revenue charged for the items it removed.
    pub revenue: Price,
}

/// Itemised outcome of one checkout run.
#[derive(Debug, Clone)]
pub struct CheckoutResult {
    /// One charge per promotion, in application order.
    pub charges: SmallVec<[PromotionCharge; 4]>,

    /// Items no promotion claimed, in cart order.
    pub remainder: Cart,

    /// Base price of the remainder.
    pub remainder_total: Price,

    /// Total cost of the cart after applying promotions.
    pub total: Price,
}

/// Calculate the total price of a cart after applying promotions in order.
///
/// Promotions mutate a private working copy, never the caller's cart. Each
/// promotion sees what the previous ones left behind, so the slice order is
/// the order of precedence; whatever remains at the end is priced from the
/// catalog. An empty slice prices the whole cart at base price.
///
/// # Errors
///
/// Returns an [`UnknownSkuError`] if an SKU left in the cart after
/// promotions has no catalog entry.
pub fn checkout(
    catalog: &Catalog,
    cart: &Cart,
    promotions: &[Promotion],
) -> Result<Price, UnknownSkuError> {
    Ok(checkout_itemized(catalog, cart, promotions)?.total)
}

/// Calculate a full [`CheckoutResult`] for a cart: per-promotion charges,
/// the unclaimed remainder, and the total.
///
/// # Errors
///
/// Returns an [`UnknownSkuError`] if an SKU left in the cart after
/// promotions has no catalog entry.
pub fn checkout_itemized(
    catalog: &Catalog,
    cart: &Cart,
    promotions: &[Promotion],
) -> Result<CheckoutResult, UnknownSkuError> {
    let mut working = cart.clone();
    let mut charges = SmallVec::new();
    let mut total = Price::ZERO;

    for promotion in promotions {
        let revenue = promotion.apply(&mut working);

        total += revenue;
        charges.push(PromotionCharge {
            promotion: *promotion,
            revenue,
        });
    }

    let remainder_total = base_price(catalog, &working)?;
    total += remainder_total;

    Ok(CheckoutResult {
        charges,
        remainder: working,
        remainder_total,
        total,
    })
}
