//! Normalized clock events.

use super::table::{Cell, FlatRecord};

/// A clock event with its packed fields unpacked and its duration computed.
///
/// Date components are kept as the exact character slices of the packed
/// `YYYYDDMM` value; times keep the hour digits as exported (`7:29` or
/// `07:29`).
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    /// Employee full name.
    pub full_name: String,
    /// Numeric job code, as exported.
    pub job_code: String,
    /// Job-code export label.
    pub exports_as: String,
    /// Clock-in day (characters 4..6 of `DATEIN`).
    pub day_in: String,
    /// Clock-in month (characters 6..8 of `DATEIN`).
    pub month_in: String,
    /// Clock-in year (characters 0..4 of `DATEIN`).
    pub year_in: String,
    /// Clock-out day.
    pub day_out: String,
    /// Clock-out month.
    pub month_out: String,
    /// Clock-out year.
    pub year_out: String,
    /// Clock-in time as `H:MM` or `HH:MM`.
    pub time_in: String,
    /// Clock-out time as `H:MM` or `HH:MM`.
    pub time_out: String,
    /// Elapsed minutes between clock-in and clock-out.
    pub op_mins: f64,
}

impl FlatRecord for NormalizedRecord {
    fn fields(&self) -> Vec<(String, Cell)> {
        vec![
            ("FULLNAME".to_string(), Cell::from(self.full_name.as_str())),
            ("JOBCODE".to_string(), Cell::from(self.job_code.as_str())),
            ("EXPORTSAS".to_string(), Cell::from(self.exports_as.as_str())),
            ("DAYIN".to_string(), Cell::from(self.day_in.as_str())),
            ("MONTHIN".to_string(), Cell::from(self.month_in.as_str())),
            ("YEARIN".to_string(), Cell::from(self.year_in.as_str())),
            ("DAYOUT".to_string(), Cell::from(self.day_out.as_str())),
            ("MONTHOUT".to_string(), Cell::from(self.month_out.as_str())),
            ("YEAROUT".to_string(), Cell::from(self.year_out.as_str())),
            ("TIMEIN".to_string(), Cell::from(self.time_in.as_str())),
            ("TIMEOUT".to_string(), Cell::from(self.time_out.as_str())),
            ("OPMINS".to_string(), Cell::Minutes(self.op_mins)),
        ]
    }
}
