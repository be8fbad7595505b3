//! Utils

use clap::Parser;

/// Arguments for the checkout examples
#[derive(Debug, Parser)]
pub struct ExampleCheckoutArgs {
    /// Fixture set to use for the catalog, cart & promotions
    #[clap(short, long, default_value = "standard")]
    pub fixture: String,

    /// Cart contents to price instead of the fixture cart, as a string of
    /// single-character SKUs
    #[clap(short, long)]
    pub cart: Option<String>,
}
