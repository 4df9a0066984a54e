//! Writing tables and records as comma-delimited text.
//!
//! Both writers refuse an empty sequence before touching the filesystem, so
//! a failed write never leaves an empty output file behind.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use crate::error::{TimeclockError, TimeclockResult};
use crate::models::{Cell, FlatRecord};

/// Writes `rows` to `path`, one line per row, with no header synthesis.
///
/// # Returns
///
/// `Ok(())` once the file is flushed, or an error if:
/// - `rows` is empty (`EmptyInput`)
/// - The file cannot be created or written (`Io` / `Csv`)
pub fn write_rows<P: AsRef<Path>>(path: P, rows: &[Vec<Cell>]) -> TimeclockResult<()> {
    let path = path.as_ref();
    let path_str = path.display().to_string();
    ensure_not_empty(rows.len(), "rows")?;

    let file = create(path, &path_str)?;
    info!(file = %path_str, rows = rows.len(), "Writing to {}", path_str);
    write_rows_to(file, rows, &path_str)
}

/// Writes `records` to `path` under a header taken from the first record.
///
/// Every record is written in the header's column order. A record lacking a
/// header column gets an empty value there; a record with a column the
/// header lacks fails with `UnexpectedField`.
///
/// # Returns
///
/// `Ok(())` once the file is flushed, or an error if:
/// - `records` is empty (`EmptyInput`)
/// - A record has a field not in the header (`UnexpectedField`)
/// - The file cannot be created or written (`Io` / `Csv`)
pub fn write_records<P: AsRef<Path>, R: FlatRecord>(
    path: P,
    records: &[R],
) -> TimeclockResult<()> {
    let path = path.as_ref();
    let path_str = path.display().to_string();
    ensure_not_empty(records.len(), "records")?;

    let file = create(path, &path_str)?;
    info!(file = %path_str, records = records.len(), "Writing to {}", path_str);
    write_records_to(file, records, &path_str)
}

/// Writes `rows` to any writer. `sink_name` is used in errors.
pub fn write_rows_to<W: Write>(
    sink: W,
    rows: &[Vec<Cell>],
    sink_name: &str,
) -> TimeclockResult<()> {
    ensure_not_empty(rows.len(), "rows")?;

    let mut writer = csv_writer(sink);
    for row in rows {
        writer
            .write_record(row.iter().map(Cell::to_string))
            .map_err(|source| csv_error(sink_name, source))?;
    }
    writer.flush().map_err(|source| io_error(sink_name, source))
}

/// Writes `records` to any writer under a header taken from the first
/// record. `sink_name` is used in errors.
pub fn write_records_to<W: Write, R: FlatRecord>(
    sink: W,
    records: &[R],
    sink_name: &str,
) -> TimeclockResult<()> {
    let Some(first) = records.first() else {
        return Err(empty("records"));
    };
    let header: Vec<String> = first.fields().into_iter().map(|(name, _)| name).collect();

    let mut writer = csv_writer(sink);
    writer
        .write_record(&header)
        .map_err(|source| csv_error(sink_name, source))?;

    for (index, record) in records.iter().enumerate() {
        let mut fields = record.fields();
        let mut line = Vec::with_capacity(header.len());
        for name in &header {
            let value = fields
                .iter()
                .position(|(field, _)| field == name)
                .map(|position| fields.swap_remove(position).1.to_string())
                .unwrap_or_default();
            line.push(value);
        }
        if let Some((field, _)) = fields.into_iter().next() {
            return Err(TimeclockError::UnexpectedField {
                field,
                record: index,
            });
        }

        writer
            .write_record(&line)
            .map_err(|source| csv_error(sink_name, source))?;
    }

    writer.flush().map_err(|source| io_error(sink_name, source))
}

fn csv_writer<W: Write>(sink: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(sink)
}

fn create(path: &Path, path_str: &str) -> TimeclockResult<File> {
    File::create(path).map_err(|source| io_error(path_str, source))
}

fn ensure_not_empty(len: usize, what: &str) -> TimeclockResult<()> {
    if len == 0 { Err(empty(what)) } else { Ok(()) }
}

fn empty(what: &str) -> TimeclockError {
    TimeclockError::EmptyInput {
        what: what.to_string(),
    }
}

fn csv_error(path: &str, source: csv::Error) -> TimeclockError {
    TimeclockError::Csv {
        path: path.to_string(),
        source,
    }
}

fn io_error(path: &str, source: io::Error) -> TimeclockError {
    TimeclockError::Io {
        path: path.to_string(),
        source,
    }
}
