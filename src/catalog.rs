//! Catalog

use std::fmt;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::prices::Price;

/// A single-character item identifier.
///
/// Any character can be carried in a cart; whether it can be *priced* is
/// decided by the [`Catalog`] it is looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sku(char);

impl Sku {
    /// Creates a new Sku
    pub const fn new(sku: char) -> Self {
        Sku(sku)
    }

    /// The underlying character.
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl From<char> for Sku {
    fn from(sku: char) -> Self {
        Sku::new(sku)
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The error returned when pricing an SKU that has no catalog entry.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("SKU '{sku}' is not in the catalog")]
pub struct UnknownSkuError {
    /// The SKU that had no catalog entry.
    pub sku: Sku,
}

/// A fixed mapping from SKU to unit price.
///
/// Built up front from explicit entries and read-only afterwards; every
/// pricing decision goes through [`Catalog::unit_price`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    prices: FxHashMap<Sku, Price>,
}

impl Catalog {
    /// Creates a catalog from plain character/minor-unit pairs.
    pub fn from_entries(entries: impl IntoIterator<Item = (char, u64)>) -> Self {
        entries
            .into_iter()
            .map(|(sku, price)| (Sku::new(sku), Price::new(price)))
            .collect()
    }

    /// Look up the unit price of a single SKU.
    ///
    /// # Errors
    ///
    /// Returns an [`UnknownSkuError`] if the SKU has no catalog entry.
    pub fn unit_price(&self, sku: Sku) -> Result<Price, UnknownSkuError> {
        self.prices
            .get(&sku)
            .copied()
            .ok_or(UnknownSkuError { sku })
    }

    /// Check whether the catalog has an entry for the given SKU.
    pub fn contains(&self, sku: Sku) -> bool {
        self.prices.contains_key(&sku)
    }

    /// Get the number of catalog entries.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl FromIterator<(Sku, Price)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (Sku, Price)>>(iter: I) -> Self {
        Catalog {
            prices: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn test_catalog() -> Catalog {
        Catalog::from_entries([('a', 50), ('b', 30), ('c', 20), ('d', 15)])
    }

    #[test]
    fn unit_price_for_known_sku() -> TestResult {
        let catalog = test_catalog();

        assert_eq!(catalog.unit_price(Sku::new('a'))?, Price::new(50));
        assert_eq!(catalog.unit_price(Sku::new('d'))?, Price::new(15));

        Ok(())
    }

    #[test]
    fn unit_price_for_unknown_sku_errors() {
        let catalog = test_catalog();

        let result = catalog.unit_price(Sku::new('z'));

        assert_eq!(result, Err(UnknownSkuError { sku: Sku::new('z') }));
    }

    #[test]
    fn from_entries_builds_catalog() {
        let catalog = test_catalog();

        assert_eq!(catalog.len(), 4);
        assert!(catalog.contains(Sku::new('b')));
        assert!(!catalog.contains(Sku::new('e')));
    }

    #[test]
    fn default_catalog_is_empty() {
        let catalog = Catalog::default();

        assert!(catalog.is_empty());
        assert!(!test_catalog().is_empty());
    }

    #[test]
    fn sku_displays_as_its_character() {
        assert_eq!(Sku::new('a').to_string(), "a");
        assert_eq!(Sku::from('d').as_char(), 'd');
    }

    #[test]
    fn unknown_sku_error_names_the_sku() {
        let error = UnknownSkuError { sku: Sku::new('z') };

        assert_eq!(error.to_string(), "SKU 'z' is not in the catalog");
    }
}
