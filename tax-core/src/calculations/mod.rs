//! Bracket tax calculations.
//!
//! This module maps monetary amounts to the fixed tax owed under a bracket
//! table, either the compiled-in standard table or a validated custom
//! [`BracketSchedule`].

pub mod brackets;
pub mod schedule;

pub use brackets::{
    BASE_TAX, LOWER_THRESHOLD, MIDDLE_TAX, NO_TAX, STANDARD_BRACKETS, TOP_TAX, UPPER_THRESHOLD,
    calculate_tax, calculate_tax_2,
};
pub use schedule::{BracketSchedule, BracketScheduleError};
