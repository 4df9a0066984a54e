//! Pivoting per-employee aggregates into a job-code × employee matrix.

use tracing::debug;

use crate::models::{FirstSeen, PersonAggregate, PivotMatrix};

/// Builds the pivot matrix from per-employee aggregates.
///
/// Job codes are collected across employees in employee order, each code
/// placed where it is first seen. The grid starts at `0.0` and each
/// employee's sums are scattered into it, so combinations never worked
/// still have a value. The aggregates are not modified.
///
/// # Examples
///
/// ```
/// use timeclock_pivot::models::PersonAggregate;
/// use timeclock_pivot::pipeline::pivot_worktime;
///
/// let mut alice = PersonAggregate::new("Alice");
/// alice.add("Support", 90.0);
/// alice.add("Break", 30.0);
/// let mut bob = PersonAggregate::new("Bob");
/// bob.add("Support", 45.0);
///
/// let matrix = pivot_worktime(&[alice, bob]);
/// assert_eq!(matrix.get("Break", "Bob"), Some(0.0));
/// assert_eq!(matrix.grand_total(), 165.0);
/// ```
pub fn pivot_worktime(people: &[PersonAggregate]) -> PivotMatrix {
    let job_codes: FirstSeen<String> = people
        .iter()
        .flat_map(|person| person.labels().iter().cloned())
        .collect();

    let mut cells = vec![vec![0.0; people.len()]; job_codes.len()];
    for (column, person) in people.iter().enumerate() {
        for (label, minutes) in person.job_minutes() {
            if let Some(row) = job_codes.position(label) {
                cells[row][column] = minutes;
            }
        }
    }

    let employees = people.iter().map(|p| p.name().to_string()).collect();
    let column_totals = people.iter().map(PersonAggregate::total_mins).collect();

    let matrix = PivotMatrix::new(employees, job_codes.into_vec(), cells, column_totals);
    debug!(
        job_codes = matrix.job_codes().len(),
        employees = matrix.employees().len(),
        grand_total = matrix.grand_total(),
        "Pivoted worktime"
    );

    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cell;

    fn person(name: &str, minutes: &[(&str, f64)]) -> PersonAggregate {
        let mut person = PersonAggregate::new(name);
        for (label, value) in minutes {
            person.add(label, *value);
        }
        person
    }

    #[test]
    fn test_alice_and_bob() {
        let people = vec![
            person("Alice", &[("Support", 90.0), ("Break", 30.0)]),
            person("Bob", &[("Support", 45.0)]),
        ];

        let rows = pivot_worktime(&people).rows();

        assert_eq!(
            rows,
            vec![
                vec![
                    Cell::from("Job Code"),
                    Cell::from("Alice"),
                    Cell::from("Bob"),
                    Cell::from("Job Code Total"),
                ],
                vec![
                    Cell::from("Support"),
                    Cell::Minutes(90.0),
                    Cell::Minutes(45.0),
                    Cell::Minutes(135.0),
                ],
                vec![
                    Cell::from("Break"),
                    Cell::Minutes(30.0),
                    Cell::Minutes(0.0),
                    Cell::Minutes(30.0),
                ],
                vec![
                    Cell::from("Employee Total"),
                    Cell::Minutes(120.0),
                    Cell::Minutes(45.0),
                    Cell::Minutes(165.0),
                ],
            ]
        );
    }

    #[test]
    fn test_first_seen_order_not_sorted() {
        // Sorted order would be Amy, Zed and Admin, Break, Lunch.
        let people = vec![
            person("Zed", &[("Lunch", 30.0), ("Break", 10.0)]),
            person("Amy", &[("Admin", 60.0), ("Lunch", 20.0)]),
        ];

        let matrix = pivot_worktime(&people);

        assert_eq!(matrix.employees(), &["Zed", "Amy"]);
        assert_eq!(matrix.job_codes(), &["Lunch", "Break", "Admin"]);
        assert_eq!(matrix.get("Admin", "Zed"), Some(0.0));
        assert_eq!(matrix.get("Break", "Amy"), Some(0.0));
        assert_eq!(matrix.row_totals(), &[50.0, 10.0, 60.0]);
    }

    #[test]
    fn test_totals_cross_check() {
        let people = vec![
            person("A", &[("x", 15.0), ("y", 7.5)]),
            person("B", &[("y", 30.0), ("z", 45.0)]),
            person("C", &[("z", 1.0)]),
        ];

        let matrix = pivot_worktime(&people);
        let row_sum: f64 = matrix.row_totals().iter().sum();
        let column_sum: f64 = matrix.column_totals().iter().sum();

        assert_eq!(matrix.grand_total(), 98.5);
        assert_eq!(row_sum, matrix.grand_total());
        assert_eq!(column_sum, matrix.grand_total());
    }

    #[test]
    fn test_aggregates_are_not_modified() {
        let people = vec![
            person("Alice", &[("Support", 90.0)]),
            person("Bob", &[("Break", 10.0)]),
        ];
        let before = people.clone();

        pivot_worktime(&people);

        assert_eq!(people, before);
        assert_eq!(people[0].minutes("Break"), None);
    }

    #[test]
    fn test_no_people() {
        let matrix = pivot_worktime(&[]);
        assert!(matrix.employees().is_empty());
        assert!(matrix.job_codes().is_empty());
        assert_eq!(Cell::Minutes(matrix.grand_total()).to_string(), "0.0");
    }
}
