//! Raw clock-event records as read from the export.
//!
//! A [`RawRecord`] is one data row plus a shared [`HeaderIndex`]. Fields are
//! looked up by logical name through the index, so the physical column
//! order of the export does not matter.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{TimeclockError, TimeclockResult};

/// Employee full name column.
pub const FULLNAME: &str = "FULLNAME";
/// Clock-in date column, packed as `YYYYDDMM`.
pub const DATEIN: &str = "DATEIN";
/// Clock-in time column, packed as `HMM` or `HHMM`.
pub const TIMEIN: &str = "TIMEIN";
/// Clock-out date column, packed as `YYYYDDMM`.
pub const DATEOUT: &str = "DATEOUT";
/// Clock-out time column, packed as `HMM` or `HHMM`.
pub const TIMEOUT: &str = "TIMEOUT";
/// Numeric job code column.
pub const JOBCODE: &str = "JOBCODE";
/// Job-code export label column.
pub const EXPORTSAS: &str = "EXPORTSAS";

/// The columns the time normalizer requires, in export order.
pub const REQUIRED_COLUMNS: [&str; 7] = [FULLNAME, DATEIN, TIMEIN, DATEOUT, TIMEOUT, JOBCODE, EXPORTSAS];

/// Column names of an export and their positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderIndex {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl HeaderIndex {
    /// Builds the index from header names in file order.
    ///
    /// When a name repeats, the later column wins.
    pub fn new(names: Vec<String>) -> Self {
        let positions = names
            .iter()
            .enumerate()
            .map(|(position, name)| (name.clone(), position))
            .collect();
        Self { names, positions }
    }

    /// The header names in file order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The column position of `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Required columns that the header lacks.
    pub fn missing_required(&self) -> Vec<&'static str> {
        REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|name| !self.positions.contains_key(*name))
            .collect()
    }
}

/// One clock event as read from the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    headers: Arc<HeaderIndex>,
    values: Vec<String>,
    line: usize,
}

impl RawRecord {
    /// Creates a record from its row values and file line number.
    pub fn new(headers: Arc<HeaderIndex>, values: Vec<String>, line: usize) -> Self {
        Self {
            headers,
            values,
            line,
        }
    }

    /// The value of `name`, if the header has it and the row is long enough.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .position(name)
            .and_then(|position| self.values.get(position))
            .map(String::as_str)
    }

    /// The value of `name`, or `MissingField`.
    pub fn field(&self, name: &str) -> TimeclockResult<&str> {
        self.get(name).ok_or_else(|| TimeclockError::MissingField {
            field: name.to_string(),
            line: self.line,
        })
    }

    /// The line of the export this record was read from.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The header this record was read against.
    pub fn headers(&self) -> &HeaderIndex {
        &self.headers
    }
}
