//! The standard bracket table and the calculations that read it.
//!
//! Every amount falls into exactly one of four outcomes:
//!
//! | Amount                        | Tax    |
//! |-------------------------------|--------|
//! | `amount <= 0` (or NaN)        | `0.0`  |
//! | `0 < amount < 1000`           | `5.0`  |
//! | `1000 <= amount < 20000`      | `10.0` |
//! | `amount >= 20000`             | `20.0` |
//!
//! Thresholds are inclusive on their lower bound, so `1000.0` already owes
//! the middle tax and `20000.0` already owes the top tax.
//!
//! # Example
//!
//! ```
//! use tax_core::calculations::{calculate_tax, calculate_tax_2};
//!
//! assert_eq!(calculate_tax(999.9), 5.0);
//! assert_eq!(calculate_tax(1000.0), 10.0);
//! assert_eq!(calculate_tax(20000.0), 20.0);
//! assert_eq!(calculate_tax(-10.0), 0.0);
//! assert_eq!(calculate_tax_2(f64::MAX), 20.0);
//! ```

use crate::TaxBracket;

/// Tax owed by amounts that are not strictly positive.
pub const NO_TAX: f64 = 0.0;

/// Tax owed by positive amounts below [`LOWER_THRESHOLD`].
pub const BASE_TAX: f64 = 5.0;

/// Tax owed from [`LOWER_THRESHOLD`] up to, but excluding, [`UPPER_THRESHOLD`].
pub const MIDDLE_TAX: f64 = 10.0;

/// Tax owed from [`UPPER_THRESHOLD`] upwards.
pub const TOP_TAX: f64 = 20.0;

/// First amount that owes [`MIDDLE_TAX`].
pub const LOWER_THRESHOLD: f64 = 1000.0;

/// First amount that owes [`TOP_TAX`].
pub const UPPER_THRESHOLD: f64 = 20000.0;

/// The standard table, ascending by `min_amount`.
///
/// The first row starts at zero, but zero itself is caught by the zero floor
/// before the table is consulted.
pub const STANDARD_BRACKETS: [TaxBracket; 3] = [
    TaxBracket::new(0.0, BASE_TAX),
    TaxBracket::new(LOWER_THRESHOLD, MIDDLE_TAX),
    TaxBracket::new(UPPER_THRESHOLD, TOP_TAX),
];

/// Returns the tax owed on `amount` under the standard table.
///
/// Never fails. NaN is not a positive amount and owes [`NO_TAX`].
pub fn calculate_tax(amount: f64) -> f64 {
    scan_brackets(&STANDARD_BRACKETS, amount).map_or(NO_TAX, |bracket| bracket.tax)
}

/// Same policy as [`calculate_tax`], resolved with a binary search over the
/// thresholds instead of a top-down scan.
pub fn calculate_tax_2(amount: f64) -> f64 {
    search_brackets(&STANDARD_BRACKETS, amount).map_or(NO_TAX, |bracket| bracket.tax)
}

/// Zero floor. Written as a positive test so that NaN falls below it.
pub(crate) fn is_taxable(amount: f64) -> bool {
    amount > 0.0
}

/// Finds the highest bracket whose lower bound `amount` reaches.
///
/// `brackets` must be ascending by `min_amount`.
pub(crate) fn scan_brackets(
    brackets: &[TaxBracket],
    amount: f64,
) -> Option<&TaxBracket> {
    if !is_taxable(amount) {
        return None;
    }

    brackets.iter().rev().find(|bracket| bracket.applies_to(amount))
}

/// Binary-search counterpart of [`scan_brackets`].
pub(crate) fn search_brackets(
    brackets: &[TaxBracket],
    amount: f64,
) -> Option<&TaxBracket> {
    if !is_taxable(amount) {
        return None;
    }

    let reached = brackets.partition_point(|bracket| bracket.applies_to(amount));
    reached.checked_sub(1).and_then(|index| brackets.get(index))
}
