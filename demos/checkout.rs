//! Checkout Example
//!
//! This example prices a cart against a catalog with a set of promotions,
//! then prints an itemised receipt.
//!
//! Use `-f` to load a fixture set by name
//! Use `-c` to price a different cart against the same catalog & promotions

use std::io;

use anyhow::Result;
use clap::Parser;

use tally::{cart::Cart, fixtures::Fixture, receipt::Receipt, utils::ExampleCheckoutArgs};

/// Checkout Example
pub fn main() -> Result<()> {
    let args = ExampleCheckoutArgs::parse();

    let fixture = Fixture::from_set(&args.fixture)?;

    let catalog = fixture.catalog()?;
    let cart = match args.cart.as_deref() {
        Some(skus) => Cart::from(skus),
        None => fixture.cart()?.clone(),
    };

    let receipt = Receipt::from_checkout(catalog, &cart, fixture.promotions())?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    receipt.write_to(&mut handle)?;

    Ok(())
}
