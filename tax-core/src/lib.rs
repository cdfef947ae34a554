pub mod calculations;
pub mod models;

pub use calculations::{BracketSchedule, BracketScheduleError, calculate_tax, calculate_tax_2};
pub use models::*;
