//! Error types for the timeclock pivot pipeline.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can stop a run. All of them are fatal: the
//! pipeline never skips a row and carries on.

use thiserror::Error;

/// The main error type for the timeclock pivot pipeline.
///
/// Every stage returns this error type, so the binary can map any failure
/// to a single diagnostic and exit status.
///
/// # Example
///
/// ```
/// use timeclock_pivot::error::TimeclockError;
///
/// let error = TimeclockError::FileNotFound {
///     path: "Oct14_JobCodes.csv".to_string(),
/// };
/// assert_eq!(error.to_string(), "Oct14_JobCodes.csv could not be found!");
/// ```
#[derive(Debug, Error)]
pub enum TimeclockError {
    /// The input file does not exist.
    #[error("{path} could not be found!")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// More than one positional argument was supplied on the command line.
    #[error("That's too many arguments! Expected at most one input file, got {count}")]
    TooManyArguments {
        /// The number of positional arguments received.
        count: usize,
    },

    /// A field required by the normalizer is absent from the header or the row.
    #[error("Missing field '{field}' on line {line}")]
    MissingField {
        /// The logical field name that was looked up.
        field: String,
        /// The 1-based data line number of the record.
        line: usize,
    },

    /// A packed date or time field does not have the expected numeric shape.
    #[error("Malformed {field} value '{value}' on line {line} ({employee})")]
    MalformedTimeField {
        /// The field name (e.g. `TIMEIN`).
        field: String,
        /// The raw value that failed to parse.
        value: String,
        /// The 1-based data line number of the record.
        line: usize,
        /// The employee the record belongs to.
        employee: String,
    },

    /// A clock-out earlier than the clock-in was rejected by the overnight policy.
    #[error(
        "Clock-out {time_out} is earlier than clock-in {time_in} on line {line} ({employee}); overnight spans are not supported"
    )]
    OvernightSpanUnsupported {
        /// The 1-based data line number of the record.
        line: usize,
        /// The employee the record belongs to.
        employee: String,
        /// The formatted clock-in time.
        time_in: String,
        /// The formatted clock-out time.
        time_out: String,
    },

    /// There was nothing to read a header from, or nothing to write.
    #[error("No {what} to process")]
    EmptyInput {
        /// What was empty (e.g. "records", "header").
        what: String,
    },

    /// A record carried a field that the output header does not have.
    #[error("Record {record} has field '{field}' which is not in the output header")]
    UnexpectedField {
        /// The offending field name.
        field: String,
        /// The 0-based index of the record in the written sequence.
        record: usize,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The CSV reader or writer failed.
    #[error("CSV error in '{path}': {source}")]
    Csv {
        /// The file being read or written.
        path: String,
        /// The underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// A filesystem or terminal operation failed.
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// The file (or stream) involved.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// A type alias for Results that return TimeclockError.
pub type TimeclockResult<T> = Result<T, TimeclockError>;
