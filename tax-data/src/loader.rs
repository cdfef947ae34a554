use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tax_core::{BracketSchedule, BracketScheduleError, TaxBracket};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur when loading bracket schedule data.
#[derive(Debug, Error)]
pub enum BracketScheduleLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Failed to read bracket file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Record {line} has no schedule name")]
    MissingScheduleName { line: u64 },

    #[error("Schedule '{schedule}' is invalid: {source}")]
    InvalidSchedule {
        schedule: String,
        #[source]
        source: BracketScheduleError,
    },
}

impl From<csv::Error> for BracketScheduleLoaderError {
    fn from(err: csv::Error) -> Self {
        BracketScheduleLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from a bracket CSV file.
///
/// - `schedule`: Name of the table the row belongs to (e.g., `standard`)
/// - `min_amount`: Inclusive lower bound of the bracket
/// - `tax`: Fixed tax owed by amounts in the bracket
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BracketRecord {
    pub schedule: String,
    pub min_amount: f64,
    pub tax: f64,
}

impl From<&BracketRecord> for TaxBracket {
    fn from(record: &BracketRecord) -> Self {
        TaxBracket::new(record.min_amount, record.tax)
    }
}

/// Loader for bracket tables stored as CSV.
///
/// One file may hold several named schedules. Rows of the same schedule must
/// appear in ascending `min_amount` order; they are validated, not sorted.
pub struct BracketScheduleLoader;

impl BracketScheduleLoader {
    /// Parse bracket records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or a
    /// byte slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<BracketRecord>, BracketScheduleLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let mut records = Vec::new();

        for result in csv_reader.records() {
            let row = result?;
            let record: BracketRecord = row.deserialize(Some(&headers))?;
            if record.schedule.is_empty() {
                // Line the record starts on, counting blank lines and quoted newlines.
                let line = row.position().map_or(0, |position| position.line());
                return Err(BracketScheduleLoaderError::MissingScheduleName { line });
            }
            records.push(record);
        }

        debug!(records = records.len(), "parsed bracket records");

        Ok(records)
    }

    /// Group records by schedule name and validate each group.
    ///
    /// Records keep their file order within a group.
    pub fn load(
        records: &[BracketRecord]
    ) -> Result<BTreeMap<String, BracketSchedule>, BracketScheduleLoaderError> {
        let mut groups: BTreeMap<&str, Vec<TaxBracket>> = BTreeMap::new();

        for record in records {
            groups
                .entry(record.schedule.as_str())
                .or_default()
                .push(TaxBracket::from(record));
        }

        let mut schedules = BTreeMap::new();
        for (name, brackets) in groups {
            let schedule = BracketSchedule::new(brackets).map_err(|source| {
                warn!(schedule = name, error = %source, "rejected bracket schedule");
                BracketScheduleLoaderError::InvalidSchedule {
                    schedule: name.to_string(),
                    source,
                }
            })?;
            schedules.insert(name.to_string(), schedule);
        }

        debug!(schedules = schedules.len(), "loaded bracket schedules");

        Ok(schedules)
    }

    /// Read, parse and load a bracket file in one step.
    pub fn load_from_path(
        path: &Path
    ) -> Result<BTreeMap<String, BracketSchedule>, BracketScheduleLoaderError> {
        debug!(path = %path.display(), "loading bracket file");
        let file = File::open(path)?;
        let records = Self::parse(file)?;

        Self::load(&records)
    }
}
