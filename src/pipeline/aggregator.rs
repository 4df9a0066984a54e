//! Per-employee aggregation functionality.

use tracing::info;

use crate::models::{FirstSeen, NormalizedRecord, PersonAggregate};

/// Groups normalized records by employee and job-code label.
///
/// Employees come out in the order their name first appears; within an
/// employee, labels keep their first-seen order. Minutes for a repeated
/// label accumulate, never overwrite.
///
/// # Examples
///
/// ```
/// use timeclock_pivot::models::NormalizedRecord;
/// use timeclock_pivot::pipeline::parse_people;
///
/// fn event(name: &str, label: &str, minutes: f64) -> NormalizedRecord {
///     NormalizedRecord {
///         full_name: name.to_string(),
///         job_code: "10".to_string(),
///         exports_as: label.to_string(),
///         day_in: "01".to_string(),
///         month_in: "01".to_string(),
///         year_in: "2014".to_string(),
///         day_out: "01".to_string(),
///         month_out: "01".to_string(),
///         year_out: "2014".to_string(),
///         time_in: "08:00".to_string(),
///         time_out: "09:00".to_string(),
///         op_mins: minutes,
///     }
/// }
///
/// let people = parse_people(&[event("Alice", "Support", 90.0), event("Alice", "Break", 30.0)]);
/// assert_eq!(people[0].total_mins(), 120.0);
/// ```
pub fn parse_people(records: &[NormalizedRecord]) -> Vec<PersonAggregate> {
    let mut names: FirstSeen<&str> = FirstSeen::new();
    let mut people: Vec<PersonAggregate> = Vec::new();

    for record in records {
        let (position, is_new) = names.insert_full(record.full_name.as_str());
        if is_new {
            people.push(PersonAggregate::new(record.full_name.as_str()));
        }
        people[position].add(&record.exports_as, record.op_mins);
    }

    for person in &people {
        info!(
            employee = %person.name(),
            total_mins = person.total_mins(),
            "Total mins for {}: {:?}",
            person.name(),
            person.total_mins()
        );
    }

    people
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(name: &str, label: &str, minutes: f64) -> NormalizedRecord {
        NormalizedRecord {
            full_name: name.to_string(),
            job_code: "0".to_string(),
            exports_as: label.to_string(),
            day_in: "01".to_string(),
            month_in: "01".to_string(),
            year_in: "2014".to_string(),
            day_out: "01".to_string(),
            month_out: "01".to_string(),
            year_out: "2014".to_string(),
            time_in: "08:00".to_string(),
            time_out: "09:00".to_string(),
            op_mins: minutes,
        }
    }

    #[test]
    fn test_alice_support_and_break() {
        let people = parse_people(&[event("Alice", "Support", 90.0), event("Alice", "Break", 30.0)]);

        assert_eq!(people.len(), 1);
        let alice = &people[0];
        assert_eq!(alice.name(), "Alice");
        assert_eq!(alice.minutes("Support"), Some(90.0));
        assert_eq!(alice.minutes("Break"), Some(30.0));
        assert_eq!(alice.total_mins(), 120.0);
    }

    #[test]
    fn test_employees_in_first_seen_order() {
        let people = parse_people(&[
            event("Zed", "Support", 10.0),
            event("Amy", "Support", 20.0),
            event("Zed", "Break", 5.0),
            event("Mia", "Lunch", 30.0),
        ]);

        let names: Vec<&str> = people.iter().map(PersonAggregate::name).collect();
        assert_eq!(names, vec!["Zed", "Amy", "Mia"]);
    }

    #[test]
    fn test_interleaved_rows_accumulate_per_person() {
        let people = parse_people(&[
            event("Alice", "Support", 30.0),
            event("Bob", "Support", 45.0),
            event("Alice", "Support", 60.0),
            event("Alice", "Break", 15.0),
            event("Alice", "Break", 15.0),
        ]);

        assert_eq!(people[0].minutes("Support"), Some(90.0));
        assert_eq!(people[0].minutes("Break"), Some(30.0));
        assert_eq!(people[0].total_mins(), 120.0);
        assert_eq!(people[1].minutes("Support"), Some(45.0));
        assert_eq!(people[1].total_mins(), 45.0);
    }

    #[test]
    fn test_no_records_no_people() {
        assert!(parse_people(&[]).is_empty());
    }
}
