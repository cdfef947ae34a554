//! Validated bracket tables.
//!
//! A [`BracketSchedule`] owns an ordered list of [`TaxBracket`] rows and
//! applies the same rule as [`calculate_tax`](super::calculate_tax): amounts
//! that are not strictly positive owe nothing, every other amount owes the
//! tax of the highest bracket it reaches.
//!
//! # Example
//!
//! ```
//! use tax_core::{BracketSchedule, TaxBracket};
//!
//! let schedule = BracketSchedule::new(vec![
//!     TaxBracket::new(0.0, 2.0),
//!     TaxBracket::new(500.0, 4.0),
//! ])
//! .unwrap();
//!
//! assert_eq!(schedule.tax_for(499.99), 2.0);
//! assert_eq!(schedule.tax_for(500.0), 4.0);
//! assert_eq!(schedule.tax_for(0.0), 0.0);
//! ```

use thiserror::Error;
use tracing::debug;

use crate::TaxBracket;
use crate::calculations::brackets::{NO_TAX, STANDARD_BRACKETS, scan_brackets, search_brackets};

/// Reasons a bracket table is rejected.
#[derive(Debug, Error, PartialEq)]
pub enum BracketScheduleError {
    /// The table has no rows.
    #[error("bracket schedule has no brackets")]
    Empty,

    /// A lower bound is NaN or infinite.
    #[error("bracket {index} has a non-finite minimum amount")]
    NonFiniteThreshold { index: usize },

    /// A lower bound is below zero.
    #[error("bracket {index} starts below zero at {min_amount}")]
    NegativeThreshold { index: usize, min_amount: f64 },

    /// A tax value is NaN, infinite or negative.
    #[error("bracket {index} has invalid tax {tax}")]
    InvalidTax { index: usize, tax: f64 },

    /// A lower bound does not strictly exceed the previous one.
    #[error("bracket {index} does not start above the previous bracket")]
    NotAscending { index: usize },
}

/// An ordered, validated bracket table.
#[derive(Debug, Clone, PartialEq)]
pub struct BracketSchedule {
    brackets: Vec<TaxBracket>,
}

impl BracketSchedule {
    /// Validates `brackets` and wraps them in a schedule.
    ///
    /// Rows must be non-empty, finite, non-negative and strictly ascending by
    /// `min_amount`.
    ///
    /// # Errors
    ///
    /// Returns the first [`BracketScheduleError`] found, scanning rows in order.
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, BracketScheduleError> {
        if brackets.is_empty() {
            return Err(BracketScheduleError::Empty);
        }

        for (index, bracket) in brackets.iter().enumerate() {
            if !bracket.min_amount.is_finite() {
                return Err(BracketScheduleError::NonFiniteThreshold { index });
            }
            if bracket.min_amount < 0.0 {
                return Err(BracketScheduleError::NegativeThreshold {
                    index,
                    min_amount: bracket.min_amount,
                });
            }
            if !bracket.tax.is_finite() || bracket.tax < 0.0 {
                return Err(BracketScheduleError::InvalidTax {
                    index,
                    tax: bracket.tax,
                });
            }
        }

        if let Some(index) = brackets
            .windows(2)
            .position(|pair| pair[1].min_amount <= pair[0].min_amount)
        {
            return Err(BracketScheduleError::NotAscending { index: index + 1 });
        }

        debug!(brackets = brackets.len(), "validated bracket schedule");

        Ok(Self { brackets })
    }

    /// The compiled-in standard table.
    pub fn standard() -> Self {
        Self {
            brackets: STANDARD_BRACKETS.to_vec(),
        }
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    pub fn len(&self) -> usize {
        self.brackets.len()
    }

    /// Always false; an empty table never validates.
    pub fn is_empty(&self) -> bool {
        self.brackets.is_empty()
    }

    /// The bracket `amount` falls into, if any.
    ///
    /// `None` for non-positive or NaN amounts and for positive amounts below
    /// the first bracket.
    pub fn bracket_for(
        &self,
        amount: f64,
    ) -> Option<&TaxBracket> {
        scan_brackets(&self.brackets, amount)
    }

    /// Tax owed on `amount`, scanning from the top bracket down.
    pub fn tax_for(
        &self,
        amount: f64,
    ) -> f64 {
        self.bracket_for(amount).map_or(NO_TAX, |bracket| bracket.tax)
    }

    /// Tax owed on `amount`, found by binary search over the thresholds.
    pub fn tax_for_indexed(
        &self,
        amount: f64,
    ) -> f64 {
        search_brackets(&self.brackets, amount).map_or(NO_TAX, |bracket| bracket.tax)
    }
}

impl Default for BracketSchedule {
    fn default() -> Self {
        Self::standard()
    }
}
