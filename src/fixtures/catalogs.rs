//! Catalog Fixtures

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{
    catalog::Catalog,
    fixtures::{FixtureError, parse_sku},
    prices::Price,
};

/// Catalog Fixture
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Unit prices in minor units, keyed by SKU
    pub prices: FxHashMap<String, u64>,
}

impl CatalogFixture {
    /// Convert the fixture into a [`Catalog`]
    ///
    /// # Errors
    ///
    /// Returns an error if any price entry is not keyed by a
    /// single-character SKU.
    pub fn try_into_catalog(self) -> Result<Catalog, FixtureError> {
        self.prices
            .into_iter()
            .map(|(sku, price)| Ok((parse_sku(&sku)?, Price::new(price))))
            .collect()
    }
}
