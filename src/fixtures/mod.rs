//! Fixtures

use std::{fs, path::PathBuf};

use thiserror::Error;

use crate::{
    cart::Cart,
    catalog::{Catalog, Sku},
    fixtures::{carts::CartFixture, catalogs::CatalogFixture, promotions::PromotionsFixture},
    promotions::{Promotion, PromotionError},
};

pub mod carts;
pub mod catalogs;
pub mod promotions;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// SKU entries must be exactly one character
    #[error("Invalid SKU: {0:?} is not a single character")]
    InvalidSku(String),

    /// Invalid promotion parameters
    #[error(transparent)]
    Promotion(#[from] PromotionError),

    /// No catalog loaded yet
    #[error("No catalog loaded; prices unknown")]
    NoCatalog,

    /// No cart loaded yet
    #[error("No cart loaded; nothing to price")]
    NoCart,
}

/// Parse a fixture SKU entry, which must be exactly one character.
///
/// # Errors
///
/// Returns a [`FixtureError::InvalidSku`] for empty or multi-character
/// entries.
pub fn parse_sku(sku: &str) -> Result<Sku, FixtureError> {
    let mut chars = sku.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Sku::new(c)),
        _ => Err(FixtureError::InvalidSku(sku.to_string())),
    }
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Loaded price catalog
    catalog: Option<Catalog>,

    /// Loaded cart
    cart: Option<Cart>,

    /// Loaded promotions, in application order
    promotions: Vec<Promotion>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            catalog: None,
            cart: None,
            promotions: Vec::new(),
        }
    }

    /// Load a catalog from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if an
    /// entry is not keyed by a single-character SKU.
    pub fn load_catalog(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("catalogs").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: CatalogFixture = serde_norway::from_str(&contents)?;

        self.catalog = Some(fixture.try_into_catalog()?);

        Ok(self)
    }

    /// Load a cart from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_cart(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("carts").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: CartFixture = serde_norway::from_str(&contents)?;

        self.cart = Some(fixture.into_cart());

        Ok(self)
    }

    /// Load promotions from a YAML fixture file, appending them in file
    /// order after any already loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a
    /// promotion fails validation.
    pub fn load_promotions(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self
            .base_path
            .join("promotions")
            .join(format!("{name}.yml"));

        let contents = fs::read_to_string(&file_path)?;
        let fixture: PromotionsFixture = serde_norway::from_str(&contents)?;

        for promotion_fixture in fixture.promotions {
            self.promotions.push(promotion_fixture.try_into_promotion()?);
        }

        Ok(self)
    }

    /// Load a complete fixture set (catalog, cart, and promotions with the
    /// same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture
            .load_catalog(name)?
            .load_cart(name)?
            .load_promotions(name)?;

        Ok(fixture)
    }

    /// Get the loaded catalog
    ///
    /// # Errors
    ///
    /// Returns an error if no catalog has been loaded yet.
    pub fn catalog(&self) -> Result<&Catalog, FixtureError> {
        self.catalog.as_ref().ok_or(FixtureError::NoCatalog)
    }

    /// Get the loaded cart
    ///
    /// # Errors
    ///
    /// Returns an error if no cart has been loaded yet.
    pub fn cart(&self) -> Result<&Cart, FixtureError> {
        self.cart.as_ref().ok_or(FixtureError::NoCart)
    }

    /// Get all loaded promotions
    pub fn promotions(&self) -> &[Promotion] {
        &self.promotions
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
