//! Rendered table values.
//!
//! Everything the writer emits is either a label or a minute count. Minute
//! counts are floating values and always render with a fractional part
//! (`90.0`, `7.5`), so whole minutes stay visually distinct from labels
//! such as numeric job codes.

use std::fmt;

/// A single value in an output table.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// A label, name or raw field value.
    Text(String),
    /// A minute count.
    Minutes(f64),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => f.write_str(text),
            // `{:?}` keeps the trailing `.0` on whole numbers.
            Cell::Minutes(minutes) => write!(f, "{:?}", minutes),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

/// A record that can be written as a header-keyed row.
///
/// `fields` yields `(column name, value)` pairs in column order. The writer
/// takes the header from the first record it sees.
pub trait FlatRecord {
    /// The record's fields in column order.
    fn fields(&self) -> Vec<(String, Cell)>;
}
