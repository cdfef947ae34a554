//! Loading bracket tables from CSV files.

mod loader;

pub use loader::{BracketRecord, BracketScheduleLoader, BracketScheduleLoaderError};
