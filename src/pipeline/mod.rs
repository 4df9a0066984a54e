//! The timeclock pivot pipeline.
//!
//! This module contains the five stages, run strictly in order: loading the
//! export, normalizing clock times, aggregating minutes per employee,
//! pivoting into a job-code × employee matrix, and writing the result.
//! [`run`] chains them for one input file.

mod aggregator;
mod loader;
mod pivoter;
mod time_normalizer;
mod writer;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::{OutputMode, PivotConfig};
use crate::error::TimeclockResult;

pub use aggregator::parse_people;
pub use loader::{load_data, read_records};
pub use pivoter::pivot_worktime;
pub use time_normalizer::{
    PackedDate, PackedTime, TimeNormalizer, elapsed_minutes, fix_time, split_date, split_time,
};
pub use writer::{write_records, write_records_to, write_rows, write_rows_to};

const CSV_EXTENSION: &str = ".csv";

/// What a completed run read and wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// The export that was read.
    pub input: PathBuf,
    /// The file that was written.
    pub output: PathBuf,
    /// Which table was written.
    pub mode: OutputMode,
    /// Number of clock events read.
    pub records: usize,
    /// Number of distinct employees.
    pub employees: usize,
    /// Number of distinct job-code labels.
    pub job_codes: usize,
    /// Total minutes across all employees.
    pub grand_total: f64,
    /// Clock events whose clock-out preceded the clock-in.
    pub overnight_spans: usize,
}

/// Appends `.csv` unless `name` already ends with it.
///
/// # Examples
///
/// ```
/// use timeclock_pivot::pipeline::ensure_csv_extension;
///
/// assert_eq!(ensure_csv_extension("Oct14_JobCodes"), "Oct14_JobCodes.csv");
/// assert_eq!(ensure_csv_extension("Oct14_JobCodes.csv"), "Oct14_JobCodes.csv");
/// ```
pub fn ensure_csv_extension(name: &str) -> String {
    if name.ends_with(CSV_EXTENSION) {
        name.to_string()
    } else {
        format!("{}{}", name, CSV_EXTENSION)
    }
}

/// The output path for `input`: its `.csv` stem, then `suffix`, then `.csv`.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use timeclock_pivot::pipeline::output_path_for;
///
/// assert_eq!(
///     output_path_for(Path::new("data/sample.csv"), "_new"),
///     PathBuf::from("data/sample_new.csv")
/// );
/// ```
pub fn output_path_for(input: &Path, suffix: &str) -> PathBuf {
    let input = input.to_string_lossy();
    let stem = input.strip_suffix(CSV_EXTENSION).unwrap_or(&*input);
    PathBuf::from(format!("{}{}{}", stem, suffix, CSV_EXTENSION))
}

/// Runs the whole pipeline for `input` and writes the configured table.
///
/// Each stage finishes before the next starts; the first error ends the run
/// and nothing is written.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use timeclock_pivot::config::PivotConfig;
/// use timeclock_pivot::pipeline::run;
///
/// let summary = run(Path::new("Oct14_JobCodes_PDX.csv"), &PivotConfig::default()).unwrap();
/// println!("Wrote {}", summary.output.display());
/// ```
pub fn run(input: &Path, config: &PivotConfig) -> TimeclockResult<RunSummary> {
    let raw = load_data(input)?;

    let mut normalizer = TimeNormalizer::new(config.time.overnight_policy);
    let normalized = normalizer.normalize_all(&raw)?;

    let people = parse_people(&normalized);
    let matrix = pivot_worktime(&people);

    let output = output_path_for(input, &config.output.suffix);
    match config.output.mode {
        OutputMode::Pivot => write_rows(&output, &matrix.rows())?,
        OutputMode::People => write_records(&output, &people)?,
        OutputMode::Normalized => write_records(&output, &normalized)?,
    }

    let summary = RunSummary {
        input: input.to_path_buf(),
        output,
        mode: config.output.mode,
        records: raw.len(),
        employees: matrix.employees().len(),
        job_codes: matrix.job_codes().len(),
        grand_total: matrix.grand_total(),
        overnight_spans: normalizer.overnight_spans(),
    };
    info!(
        records = summary.records,
        employees = summary.employees,
        job_codes = summary.job_codes,
        grand_total = summary.grand_total,
        overnight_spans = summary.overnight_spans,
        mode = %summary.mode,
        output = %summary.output.display(),
        "Run complete"
    );

    Ok(summary)
}
