//! Loading a timeclock export into raw records.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::error::{TimeclockError, TimeclockResult};
use crate::models::{HeaderIndex, RawRecord};

/// Loads `path` into an ordered sequence of raw records.
///
/// The first line is the header; every following line becomes a
/// [`RawRecord`] in file order. The file is closed before this returns.
///
/// # Returns
///
/// The records, or an error if:
/// - The file does not exist (`FileNotFound`)
/// - The file has no header line (`EmptyInput`)
/// - The file cannot be read or decoded (`Io` / `Csv`)
///
/// # Examples
///
/// ```no_run
/// use timeclock_pivot::pipeline::load_data;
///
/// let records = load_data("Oct14_JobCodes_PDX.csv").unwrap();
/// println!("{} clock events", records.len());
/// ```
pub fn load_data<P: AsRef<Path>>(path: P) -> TimeclockResult<Vec<RawRecord>> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => TimeclockError::FileNotFound {
            path: path_str.clone(),
        },
        _ => TimeclockError::Io {
            path: path_str.clone(),
            source,
        },
    })?;

    info!(file = %path_str, "Reading {}", path_str);
    read_records(file, &path_str)
}

/// Reads raw records from any reader. `source_name` is used in errors and logs.
pub fn read_records<R: Read>(reader: R, source_name: &str) -> TimeclockResult<Vec<RawRecord>> {
    let csv_error = |source: csv::Error| TimeclockError::Csv {
        path: source_name.to_string(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = reader.records();

    let header = match rows.next() {
        Some(row) => row.map_err(csv_error)?,
        None => {
            return Err(TimeclockError::EmptyInput {
                what: format!("header in {}", source_name),
            });
        }
    };

    let headers = Arc::new(HeaderIndex::new(
        header.iter().map(normalize_header).collect(),
    ));
    info!(headers = ?headers.names(), "Headers: {:?}", headers.names());

    let missing = headers.missing_required();
    if !missing.is_empty() {
        warn!(missing = ?missing, "Export header lacks required columns");
    }

    let mut records = Vec::new();
    for (index, row) in rows.enumerate() {
        let row = row.map_err(csv_error)?;
        // Header is line 1, so the first data row is line 2 unless the reader knows better.
        let line = row
            .position()
            .map(|position| position.line() as usize)
            .unwrap_or(index + 2);
        let values = row.iter().map(str::to_string).collect();
        records.push(RawRecord::new(Arc::clone(&headers), values, line));
    }

    Ok(records)
}

/// Strips whitespace and one pair of surrounding angle brackets (`<FULLNAME>`).
fn normalize_header(name: &str) -> String {
    let name = name.trim();
    name.strip_prefix('<')
        .and_then(|inner| inner.strip_suffix('>'))
        .unwrap_or(name)
        .trim()
        .to_string()
}
