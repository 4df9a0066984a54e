//! Core data models for the timeclock pivot pipeline.
//!
//! This module contains the records each stage produces: raw rows, normalized
//! clock events, per-employee aggregates and the pivot matrix.

mod first_seen;
mod normalized_record;
mod person_aggregate;
mod pivot_matrix;
mod raw_record;
mod table;

pub use first_seen::FirstSeen;
pub use normalized_record::NormalizedRecord;
pub use person_aggregate::{NAME, PersonAggregate, TOTAL_MINS};
pub use pivot_matrix::{
    EMPLOYEE_TOTAL_LABEL, JOB_CODE_HEADER, JOB_CODE_TOTAL_HEADER, PivotMatrix,
};
pub use raw_record::{
    DATEIN, DATEOUT, EXPORTSAS, FULLNAME, HeaderIndex, JOBCODE, REQUIRED_COLUMNS, RawRecord,
    TIMEIN, TIMEOUT,
};
pub use table::{Cell, FlatRecord};
