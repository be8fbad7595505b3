//! Receipt

use std::io;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};

use crate::{
    cart::Cart,
    catalog::{Catalog, Sku, UnknownSkuError},
    checkout::{PromotionCharge, checkout_itemized},
    prices::Price,
    pricing::base_price,
    promotions::Promotion,
};

/// One per-SKU line of items bought at list price.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ListPriceLine {
    /// The SKU.
    pub sku: Sku,

    /// How many of it no promotion claimed.
    pub quantity: usize,

    /// Line total at the catalog unit price.
    pub amount: Price,
}

/// Final receipt for one checkout run.
#[derive(Debug, Clone)]
pub struct Receipt {
    /// Total cost before any promotion applications
    subtotal: Price,

    /// One charge per promotion, in application order
    charges: SmallVec<[PromotionCharge; 4]>,

    /// Per-SKU lines for the items no promotion claimed, sorted by SKU
    list_price_lines: SmallVec<[ListPriceLine; 4]>,

    /// Total amount payable after promotions
    total: Price,
}

impl Receipt {
    /// Create a new receipt with the given details.
    #[must_use]
    pub fn new(
        subtotal: Price,
        charges: SmallVec<[PromotionCharge; 4]>,
        list_price_lines: SmallVec<[ListPriceLine; 4]>,
        total: Price,
    ) -> Self {
        Self {
            subtotal,
            charges,
            list_price_lines,
            total,
        }
    }

    /// Run a checkout and lay its outcome out as a receipt.
    ///
    /// # Errors
    ///
    /// Returns an [`UnknownSkuError`] if any SKU in the cart has no catalog
    /// entry. The subtotal prices the whole cart, so unlike
    /// [`crate::checkout::checkout`] this rejects an off-catalog SKU even
    /// when a promotion would have consumed it.
    pub fn from_checkout(
        catalog: &Catalog,
        cart: &Cart,
        promotions: &[Promotion],
    ) -> Result<Self, UnknownSkuError> {
        let subtotal = base_price(catalog, cart)?;
        let result = checkout_itemized(catalog, cart, promotions)?;

        Ok(Receipt {
            subtotal,
            charges: result.charges,
            list_price_lines: list_price_lines(catalog, &result.remainder)?,
            total: result.total,
        })
    }

    /// Total cost before any promotion applications
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.subtotal
    }

    /// Total amount payable after promotions
    #[must_use]
    pub fn total(&self) -> Price {
        self.total
    }

    /// One charge per promotion, in application order.
    #[must_use]
    pub fn charges(&self) -> &[PromotionCharge] {
        &self.charges
    }

    /// Per-SKU lines for the items no promotion claimed, sorted by SKU.
    #[must_use]
    pub fn list_price_lines(&self) -> &[ListPriceLine] {
        &self.list_price_lines
    }

    /// Calculate the savings made by applying promotions.
    ///
    /// Returns `None` when the promotions charged more than the base price
    /// would have.
    #[must_use]
    pub fn savings(&self) -> Option<Price> {
        self.subtotal.checked_sub(self.total)
    }

    /// Write the receipt as a table followed by a totals summary.
    ///
    /// Promotions that charged nothing are kept in [`Receipt::charges`] but
    /// left off the rendered table.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> io::Result<()> {
        let mut builder = Builder::default();

        builder.push_record(["Item", "Amount"]);

        for charge in self.charges.iter().filter(|charge| *charge.revenue > 0) {
            builder.push_record([charge.promotion.to_string(), charge.revenue.to_string()]);
        }

        for line in &self.list_price_lines {
            builder.push_record([
                format!("{} × {} at list price", line.quantity, line.sku),
                line.amount.to_string(),
            ]);
        }

        write_receipt_table(&mut out, builder)?;

        self.write_summary(&mut out)
    }

    fn write_summary(&self, out: &mut impl io::Write) -> io::Result<()> {
        let subtotal = self.subtotal;
        let total = self.total;

        writeln!(out, " Subtotal: {subtotal}")?;
        writeln!(out, "    Total: {total}")?;

        if let Some(savings) = self.savings()
            && *savings > 0
        {
            writeln!(out, "  Savings: {savings}")?;
        }

        Ok(())
    }
}

fn list_price_lines(
    catalog: &Catalog,
    remainder: &Cart,
) -> Result<SmallVec<[ListPriceLine; 4]>, UnknownSkuError> {
    let mut counts: FxHashMap<Sku, usize> = FxHashMap::default();

    for sku in remainder {
        *counts.entry(sku).or_insert(0) += 1;
    }

    let mut lines: SmallVec<[ListPriceLine; 4]> = SmallVec::new();

    for (sku, quantity) in counts {
        lines.push(ListPriceLine {
            sku,
            quantity,
            amount: catalog.unit_price(sku)? * quantity,
        });
    }

    lines.sort_unstable_by_key(|line| line.sku);

    Ok(lines)
}

fn write_receipt_table(out: &mut impl io::Write, builder: Builder) -> io::Result<()> {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(1..2), Alignment::right());

    writeln!(out, "{table}")
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;
    use testresult::TestResult;

    use super::*;

    fn test_catalog() -> Catalog {
        Catalog::from_entries([('a', 50), ('b', 30), ('c', 20), ('d', 15)])
    }

    fn test_promotions() -> Result<[Promotion; 3], crate::promotions::PromotionError> {
        Ok([
            Promotion::individual(3, Sku::new('a'), Price::new(130))?,
            Promotion::individual(2, Sku::new('b'), Price::new(45))?,
            Promotion::combined(Sku::new('c'), Sku::new('d'), Price::new(30))?,
        ])
    }

    #[test]
    fn accessors_return_values_from_constructor() {
        let receipt = Receipt::new(
            Price::new(300),
            smallvec![],
            smallvec![],
            Price::new(250),
        );

        assert_eq!(receipt.subtotal(), Price::new(300));
        assert_eq!(receipt.total(), Price::new(250));
        assert!(receipt.charges().is_empty());
        assert!(receipt.list_price_lines().is_empty());
    }

    #[test]
    fn savings_is_subtotal_minus_total() {
        let receipt = Receipt::new(
            Price::new(300),
            smallvec![],
            smallvec![],
            Price::new(250),
        );

        assert_eq!(receipt.savings(), Some(Price::new(50)));
    }

    #[test]
    fn savings_is_none_when_promotions_exceed_base_price() -> TestResult {
        let promotions = [Promotion::individual(1, Sku::new('d'), Price::new(1000))?];

        let receipt = Receipt::from_checkout(&test_catalog(), &Cart::from("d"), &promotions)?;

        assert_eq!(receipt.savings(), None);

        Ok(())
    }

    #[test]
    fn from_checkout_breaks_the_cart_down() -> TestResult {
        let receipt = Receipt::from_checkout(
            &test_catalog(),
            &Cart::from("aaaaabbbbbc"),
            &test_promotions()?,
        )?;

        assert_eq!(receipt.subtotal(), Price::new(420));
        assert_eq!(receipt.total(), Price::new(370));
        assert_eq!(receipt.savings(), Some(Price::new(50)));

        assert_eq!(receipt.charges().len(), 3);
        assert_eq!(receipt.charges()[0].revenue, Price::new(130));
        assert_eq!(receipt.charges()[1].revenue, Price::new(90));
        assert_eq!(receipt.charges()[2].revenue, Price::ZERO);

        assert_eq!(
            receipt.list_price_lines(),
            &[
                ListPriceLine {
                    sku: Sku::new('a'),
                    quantity: 2,
                    amount: Price::new(100),
                },
                ListPriceLine {
                    sku: Sku::new('b'),
                    quantity: 1,
                    amount: Price::new(30),
                },
                ListPriceLine {
                    sku: Sku::new('c'),
                    quantity: 1,
                    amount: Price::new(20),
                },
            ]
        );

        Ok(())
    }

    #[test]
    fn list_price_lines_sum_to_the_remainder_total() -> TestResult {
        let receipt = Receipt::from_checkout(
            &test_catalog(),
            &Cart::from("aaaaabbbbbc"),
            &test_promotions()?,
        )?;

        let remainder: Price = receipt
            .list_price_lines()
            .iter()
            .map(|line| line.amount)
            .sum();

        assert_eq!(remainder, Price::new(150));

        Ok(())
    }

    #[test]
    fn from_checkout_rejects_unknown_skus_even_when_consumed() -> TestResult {
        let promotions = [Promotion::individual(1, Sku::new('z'), Price::new(10))?];

        let result = Receipt::from_checkout(&test_catalog(), &Cart::from("z"), &promotions);

        assert!(matches!(
            result,
            Err(UnknownSkuError { sku }) if sku == Sku::new('z')
        ));

        Ok(())
    }

    #[test]
    fn write_to_renders_charges_and_list_price_items() -> TestResult {
        let receipt = Receipt::from_checkout(
            &test_catalog(),
            &Cart::from("aaaaabbbbbc"),
            &test_promotions()?,
        )?;

        let mut out = Vec::new();
        receipt.write_to(&mut out)?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("3 × a for 130"));
        assert!(output.contains("2 × b for 45"));
        assert!(output.contains("2 × a at list price"));
        assert!(output.contains("Subtotal: 420"));
        assert!(output.contains("Total: 370"));
        assert!(output.contains("Savings: 50"));

        // The combined promotion never matched, so it stays off the table.
        assert!(!output.contains("c + d for 30"));

        Ok(())
    }

    #[test]
    fn write_to_omits_the_savings_line_without_savings() -> TestResult {
        let promotions = [Promotion::individual(1, Sku::new('d'), Price::new(1000))?];

        let receipt = Receipt::from_checkout(&test_catalog(), &Cart::from("d"), &promotions)?;

        let mut out = Vec::new();
        receipt.write_to(&mut out)?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("Total: 1000"));
        assert!(!output.contains("Savings:"));

        Ok(())
    }
}
