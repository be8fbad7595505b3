//! Tally
//!
//! Tally is a supermarket checkout engine: it prices carts of single-character
//! SKUs against a catalog of unit prices, with multi-buy and pairing
//! promotions applied in caller order.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod fixtures;
pub mod prices;
pub mod pricing;
pub mod promotions;
pub mod receipt;
pub mod utils;
