//! Cart

use smallvec::SmallVec;

use crate::catalog::Sku;

/// An ordered multiset of SKUs.
///
/// Promotions remove the items they discount in place, so checkout always
/// works on a private copy rather than the caller's cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    skus: SmallVec<[Sku; 16]>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Add one SKU to the end of the cart.
    pub fn push(&mut self, sku: Sku) {
        self.skus.push(sku);
    }

    /// Get the number of items in the cart.
    pub fn len(&self) -> usize {
        self.skus.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.skus.is_empty()
    }

    /// Iterate over the SKUs in cart order.
    pub fn iter(&self) -> impl Iterator<Item = Sku> + '_ {
        self.skus.iter().copied()
    }

    /// Count the occurrences of one SKU.
    pub fn count_of(&self, sku: Sku) -> usize {
        self.iter().filter(|s| *s == sku).count()
    }

    /// Removes the first `n` occurrences of `sku`, scanning left to right.
    ///
    /// Removes every occurrence when fewer than `n` are present. Returns the
    /// number actually removed.
    pub fn remove_first_n(&mut self, sku: Sku, n: usize) -> usize {
        let mut removed = 0;

        self.skus.retain(|s| {
            if *s == sku && removed < n {
                removed += 1;
                false
            } else {
                true
            }
        });

        removed
    }
}

impl From<&str> for Cart {
    /// Each character of the literal becomes one SKU, in order.
    fn from(skus: &str) -> Self {
        skus.chars().map(Sku::new).collect()
    }
}

impl FromIterator<Sku> for Cart {
    fn from_iter<I: IntoIterator<Item = Sku>>(iter: I) -> Self {
        Cart {
            skus: iter.into_iter().collect(),
        }
    }
}

impl Extend<Sku> for Cart {
    fn extend<I: IntoIterator<Item = Sku>>(&mut self, iter: I) {
        self.skus.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = Sku;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Sku>>;

    fn into_iter(self) -> Self::IntoIter {
        self.skus.iter().copied()
    }
}
