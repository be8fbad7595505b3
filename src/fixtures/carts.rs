//! Cart Fixtures

use serde::Deserialize;

use crate::cart::Cart;

/// Cart Fixture
#[derive(Debug, Deserialize)]
pub struct CartFixture {
    /// The cart contents as a string of single-character SKUs
    pub skus: String,
}

impl CartFixture {
    /// Convert the fixture into a [`Cart`]
    pub fn into_cart(self) -> Cart {
        Cart::from(self.skus.as_str())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::catalog::Sku;

    use super::*;

    #[test]
    fn fixture_converts_to_cart() -> TestResult {
        let yaml = "skus: abba\n";

        let fixture: CartFixture = serde_norway::from_str(yaml)?;
        let cart = fixture.into_cart();

        assert_eq!(cart.len(), 4);
        assert_eq!(cart.count_of(Sku::new('a')), 2);
        assert_eq!(cart.count_of(Sku::new('b')), 2);

        Ok(())
    }

    #[test]
    fn empty_fixture_converts_to_empty_cart() -> TestResult {
        let yaml = "skus: ''\n";

        let fixture: CartFixture = serde_norway::from_str(yaml)?;
        let cart = fixture.into_cart();

        assert!(cart.is_empty());

        Ok(())
    }
}
