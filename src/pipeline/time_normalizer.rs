//! Time normalization functionality.
//!
//! This module unpacks the export's packed date and time fields and computes
//! the elapsed minutes of each clock event.
//!
//! Dates are packed as `YYYYDDMM` and split positionally: year, then day,
//! then month. No calendar validation is done, so a `YYYYMMDD` export comes
//! out with day and month swapped. Times are packed as `HMM` or `HHMM`; the
//! last two digits are minutes.

use chrono::NaiveTime;
use tracing::{debug, warn};

use crate::config::OvernightPolicy;
use crate::error::{TimeclockError, TimeclockResult};
use crate::models::{
    DATEIN, DATEOUT, EXPORTSAS, FULLNAME, JOBCODE, NormalizedRecord, RawRecord, TIMEIN, TIMEOUT,
};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// A packed `YYYYDDMM` date split into its character slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedDate {
    /// Characters 0..4.
    pub year: String,
    /// Characters 4..6.
    pub day: String,
    /// Characters 6..8.
    pub month: String,
}

/// A packed `HMM`/`HHMM` time with its display form and parsed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedTime {
    /// The hour digits as exported, a colon, then the minute digits.
    pub display: String,
    /// The parsed time of day.
    pub time: NaiveTime,
}

/// Splits a packed `YYYYDDMM` date. Returns `None` unless `value` is
/// exactly eight ASCII digits.
///
/// # Examples
///
/// ```
/// use timeclock_pivot::pipeline::split_date;
///
/// let date = split_date("20141001").unwrap();
/// assert_eq!((date.year.as_str(), date.day.as_str(), date.month.as_str()), ("2014", "10", "01"));
/// ```
pub fn split_date(value: &str) -> Option<PackedDate> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(PackedDate {
        year: value[..4].to_string(),
        day: value[4..6].to_string(),
        month: value[6..].to_string(),
    })
}

/// Splits a packed `HMM`/`HHMM` time. Returns `None` unless `value` is three
/// or four ASCII digits forming a valid time of day.
///
/// # Examples
///
/// ```
/// use timeclock_pivot::pipeline::split_time;
///
/// assert_eq!(split_time("0729").unwrap().display, "07:29");
/// assert_eq!(split_time("729").unwrap().display, "7:29");
/// assert!(split_time("2460").is_none());
/// ```
pub fn split_time(value: &str) -> Option<PackedTime> {
    if !(3..=4).contains(&value.len()) || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let (hours, minutes) = value.split_at(value.len() - 2);
    let time = NaiveTime::from_hms_opt(hours.parse().ok()?, minutes.parse().ok()?, 0)?;

    Some(PackedTime {
        display: format!("{}:{}", hours, minutes),
        time,
    })
}

/// Minutes from `time_in` to `time_out` under `policy`.
///
/// A same-day span (`time_out >= time_in`) is always the plain difference.
/// An earlier clock-out wraps to the next day, takes the absolute difference,
/// or returns `None` for [`OvernightPolicy::Reject`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use timeclock_pivot::config::OvernightPolicy;
/// use timeclock_pivot::pipeline::elapsed_minutes;
///
/// let eight = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
/// let half_nine = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
/// assert_eq!(elapsed_minutes(eight, half_nine, OvernightPolicy::NextDay), Some(90.0));
/// assert_eq!(elapsed_minutes(half_nine, eight, OvernightPolicy::NextDay), Some(1350.0));
/// assert_eq!(elapsed_minutes(half_nine, eight, OvernightPolicy::Reject), None);
/// ```
pub fn elapsed_minutes(
    time_in: NaiveTime,
    time_out: NaiveTime,
    policy: OvernightPolicy,
) -> Option<f64> {
    let seconds = time_out.signed_duration_since(time_in).num_seconds();
    if seconds >= 0 {
        return Some(seconds as f64 / 60.0);
    }

    match policy {
        OvernightPolicy::NextDay => Some(seconds.rem_euclid(SECONDS_PER_DAY) as f64 / 60.0),
        OvernightPolicy::Absolute => Some(seconds.abs() as f64 / 60.0),
        OvernightPolicy::Reject => None,
    }
}

/// Converts raw records into normalized records, counting overnight spans.
#[derive(Debug, Clone)]
pub struct TimeNormalizer {
    policy: OvernightPolicy,
    overnight_spans: usize,
}

impl TimeNormalizer {
    /// Creates a normalizer applying `policy` to overnight spans.
    pub fn new(policy: OvernightPolicy) -> Self {
        Self {
            policy,
            overnight_spans: 0,
        }
    }

    /// Number of overnight spans seen (and accepted) so far.
    pub fn overnight_spans(&self) -> usize {
        self.overnight_spans
    }

    /// Normalizes every record, in order. Stops at the first error.
    pub fn normalize_all(&mut self, records: &[RawRecord]) -> TimeclockResult<Vec<NormalizedRecord>> {
        records.iter().map(|record| self.normalize(record)).collect()
    }

    /// Normalizes a single record.
    ///
    /// # Returns
    ///
    /// The normalized record, or an error if:
    /// - A required field is absent (`MissingField`)
    /// - A date or time has the wrong shape (`MalformedTimeField`)
    /// - The clock-out precedes the clock-in under
    ///   [`OvernightPolicy::Reject`] (`OvernightSpanUnsupported`)
    pub fn normalize(&mut self, record: &RawRecord) -> TimeclockResult<NormalizedRecord> {
        let full_name = record.field(FULLNAME)?;

        let malformed = |field: &str, value: &str| TimeclockError::MalformedTimeField {
            field: field.to_string(),
            value: value.to_string(),
            line: record.line(),
            employee: full_name.to_string(),
        };

        let date_in_raw = record.field(DATEIN)?;
        let date_in = split_date(date_in_raw).ok_or_else(|| malformed(DATEIN, date_in_raw))?;
        let date_out_raw = record.field(DATEOUT)?;
        let date_out = split_date(date_out_raw).ok_or_else(|| malformed(DATEOUT, date_out_raw))?;
        let time_in_raw = record.field(TIMEIN)?;
        let time_in = split_time(time_in_raw).ok_or_else(|| malformed(TIMEIN, time_in_raw))?;
        let time_out_raw = record.field(TIMEOUT)?;
        let time_out = split_time(time_out_raw).ok_or_else(|| malformed(TIMEOUT, time_out_raw))?;

        let op_mins = match elapsed_minutes(time_in.time, time_out.time, self.policy) {
            Some(minutes) => minutes,
            None => {
                return Err(TimeclockError::OvernightSpanUnsupported {
                    line: record.line(),
                    employee: full_name.to_string(),
                    time_in: time_in.display,
                    time_out: time_out.display,
                });
            }
        };

        if time_out.time < time_in.time {
            self.overnight_spans += 1;
            warn!(
                line = record.line(),
                employee = %full_name,
                time_in = %time_in.display,
                time_out = %time_out.display,
                policy = ?self.policy,
                minutes = op_mins,
                "OvernightSpanUnsupported: clock-out is earlier than clock-in"
            );
        }

        let normalized = NormalizedRecord {
            full_name: full_name.to_string(),
            job_code: record.field(JOBCODE)?.to_string(),
            exports_as: record.field(EXPORTSAS)?.to_string(),
            day_in: date_in.day,
            month_in: date_in.month,
            year_in: date_in.year,
            day_out: date_out.day,
            month_out: date_out.month,
            year_out: date_out.year,
            time_in: time_in.display,
            time_out: time_out.display,
            op_mins,
        };
        debug!(line = record.line(), employee = %normalized.full_name, minutes = op_mins, "Normalized clock event");

        Ok(normalized)
    }
}

/// Normalizes every record under `policy`.
///
/// Convenience wrapper over [`TimeNormalizer`] when the overnight count is
/// not needed.
pub fn fix_time(
    records: &[RawRecord],
    policy: OvernightPolicy,
) -> TimeclockResult<Vec<NormalizedRecord>> {
    TimeNormalizer::new(policy).normalize_all(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HeaderIndex;
    use std::sync::Arc;

    const HEADERS: [&str; 7] = [
        "FULLNAME", "DATEIN", "TIMEIN", "DATEOUT", "TIMEOUT", "JOBCODE", "EXPORTSAS",
    ];

    fn raw(values: [&str; 7]) -> RawRecord {
        let headers = Arc::new(HeaderIndex::new(
            HEADERS.iter().map(|name| name.to_string()).collect(),
        ));
        RawRecord::new(headers, values.iter().map(|v| v.to_string()).collect(), 2)
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_normalizes_customer_support_event() {
        let record = raw([
            "Danny Sellers", "20141001", "0729", "20141001", "0927", "30001", "Customer Support",
        ]);

        let normalized = TimeNormalizer::new(OvernightPolicy::NextDay)
            .normalize(&record)
            .unwrap();

        assert_eq!(normalized.full_name, "Danny Sellers");
        assert_eq!(normalized.job_code, "30001");
        assert_eq!(normalized.exports_as, "Customer Support");
        assert_eq!(normalized.year_in, "2014");
        assert_eq!(normalized.day_in, "10");
        assert_eq!(normalized.month_in, "01");
        assert_eq!(normalized.time_in, "07:29");
        assert_eq!(normalized.time_out, "09:27");
        assert_eq!(normalized.op_mins, 118.0);
    }

    #[test]
    fn test_three_digit_times_keep_single_hour_digit() {
        let record = raw(["Alice", "20140101", "800", "20140101", "930", "10", "Support"]);
        let normalized = fix_time(&[record], OvernightPolicy::NextDay).unwrap();

        assert_eq!(normalized[0].time_in, "8:00");
        assert_eq!(normalized[0].time_out, "9:30");
        assert_eq!(normalized[0].op_mins, 90.0);
    }

    #[test]
    fn test_split_date_is_year_day_month() {
        let date = split_date("20143112").unwrap();
        assert_eq!(date.year, "2014");
        assert_eq!(date.day, "31");
        assert_eq!(date.month, "12");
    }

    #[test]
    fn test_split_date_rejects_wrong_shape() {
        assert!(split_date("2014101").is_none());
        assert!(split_date("201410011").is_none());
        assert!(split_date("2014-10-").is_none());
        assert!(split_date("").is_none());
    }

    #[test]
    fn test_split_time_rejects_wrong_shape() {
        assert!(split_time("30").is_none());
        assert!(split_time("12345").is_none());
        assert!(split_time("07a9").is_none());
        assert!(split_time("0760").is_none());
        assert!(split_time("2500").is_none());
    }

    #[test]
    fn test_split_time_accepts_midnight_and_last_minute() {
        assert_eq!(split_time("000").unwrap().time, time(0, 0));
        assert_eq!(split_time("2359").unwrap().time, time(23, 59));
    }

    #[test]
    fn test_same_day_elapsed_minutes() {
        assert_eq!(
            elapsed_minutes(time(7, 29), time(9, 27), OvernightPolicy::Reject),
            Some(118.0)
        );
        assert_eq!(
            elapsed_minutes(time(9, 0), time(9, 0), OvernightPolicy::Reject),
            Some(0.0)
        );
    }

    #[test]
    fn test_overnight_next_day_wraps() {
        // 22:00 -> 06:00 is eight hours into the next day.
        assert_eq!(
            elapsed_minutes(time(22, 0), time(6, 0), OvernightPolicy::NextDay),
            Some(480.0)
        );
    }

    #[test]
    fn test_overnight_absolute_difference() {
        assert_eq!(
            elapsed_minutes(time(22, 0), time(6, 0), OvernightPolicy::Absolute),
            Some(960.0)
        );
    }

    #[test]
    fn test_overnight_counted_and_kept_under_next_day() {
        let record = raw(["Alice", "20140101", "2200", "20140201", "0600", "10", "Night"]);
        let mut normalizer = TimeNormalizer::new(OvernightPolicy::NextDay);

        let normalized = normalizer.normalize(&record).unwrap();

        assert_eq!(normalized.op_mins, 480.0);
        assert_eq!(normalizer.overnight_spans(), 1);
    }

    #[test]
    fn test_overnight_rejected_under_reject() {
        let record = raw(["Alice", "20140101", "2200", "20140201", "0600", "10", "Night"]);

        match TimeNormalizer::new(OvernightPolicy::Reject).normalize(&record) {
            Err(TimeclockError::OvernightSpanUnsupported {
                employee,
                time_in,
                time_out,
                ..
            }) => {
                assert_eq!(employee, "Alice");
                assert_eq!(time_in, "22:00");
                assert_eq!(time_out, "06:00");
            }
            other => panic!("Expected OvernightSpanUnsupported, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_time_names_the_record() {
        let record = raw(["Bob", "20140101", "8:00", "20140101", "0930", "10", "Support"]);

        match fix_time(&[record], OvernightPolicy::NextDay) {
            Err(TimeclockError::MalformedTimeField {
                field,
                value,
                line,
                employee,
            }) => {
                assert_eq!(field, "TIMEIN");
                assert_eq!(value, "8:00");
                assert_eq!(line, 2);
                assert_eq!(employee, "Bob");
            }
            other => panic!("Expected MalformedTimeField, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_date_is_reported() {
        let record = raw(["Bob", "2014-01-01", "0800", "20140101", "0930", "10", "Support"]);

        assert!(matches!(
            fix_time(&[record], OvernightPolicy::NextDay),
            Err(TimeclockError::MalformedTimeField { ref field, .. }) if field == "DATEIN"
        ));
    }

    #[test]
    fn test_missing_column_returns_missing_field() {
        let headers = Arc::new(HeaderIndex::new(
            ["FULLNAME", "DATEIN", "TIMEIN", "DATEOUT", "TIMEOUT", "JOBCODE"]
                .iter()
                .map(|name| name.to_string())
                .collect(),
        ));
        let record = RawRecord::new(
            headers,
            ["Alice", "20140101", "0800", "20140101", "0930", "10"]
                .iter()
                .map(|v| v.to_string())
                .collect(),
            4,
        );

        match fix_time(&[record], OvernightPolicy::NextDay) {
            Err(TimeclockError::MissingField { field, line }) => {
                assert_eq!(field, "EXPORTSAS");
                assert_eq!(line, 4);
            }
            other => panic!("Expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_output_order_matches_input_order() {
        let records = vec![
            raw(["Zed", "20140101", "0800", "20140101", "0810", "1", "A"]),
            raw(["Amy", "20140101", "0800", "20140101", "0820", "2", "B"]),
        ];

        let normalized = fix_time(&records, OvernightPolicy::NextDay).unwrap();
        let names: Vec<&str> = normalized.iter().map(|r| r.full_name.as_str()).collect();
        assert_eq!(names, vec!["Zed", "Amy"]);
    }
}
