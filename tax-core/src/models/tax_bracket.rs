use serde::{Deserialize, Serialize};

/// A single row of a bracket table.
///
/// `min_amount` is the inclusive lower bound of the bracket. The bracket ends
/// where the next row's `min_amount` begins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_amount: f64,
    pub tax: f64,
}

impl TaxBracket {
    pub const fn new(
        min_amount: f64,
        tax: f64,
    ) -> Self {
        Self { min_amount, tax }
    }

    /// Whether `amount` reaches this bracket's lower bound.
    pub fn applies_to(
        &self,
        amount: f64,
    ) -> bool {
        amount >= self.min_amount
    }
}
