//! Per-employee minute totals.

use super::first_seen::FirstSeen;
use super::pivot_matrix::sum_minutes;
use super::table::{Cell, FlatRecord};

/// Column name of an employee's total in the flat record view.
pub const TOTAL_MINS: &str = "Total_mins";
/// Column name of an employee's name in the flat record view.
pub const NAME: &str = "Name";

/// Minutes per job-code label for one employee.
///
/// Labels keep the order in which they first appeared for this employee.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonAggregate {
    name: String,
    labels: FirstSeen<String>,
    minutes: Vec<f64>,
}

impl PersonAggregate {
    /// Creates an aggregate with no minutes recorded.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            labels: FirstSeen::new(),
            minutes: Vec::new(),
        }
    }

    /// Adds `minutes` to the running sum for `label`.
    pub fn add(&mut self, label: &str, minutes: f64) {
        match self.labels.position(label) {
            Some(position) => self.minutes[position] += minutes,
            None => {
                self.labels.insert(label.to_string());
                self.minutes.push(minutes);
            }
        }
    }

    /// The employee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The job-code labels in first-seen order.
    pub fn labels(&self) -> &[String] {
        self.labels.as_slice()
    }

    /// The summed minutes for `label`.
    pub fn minutes(&self, label: &str) -> Option<f64> {
        self.labels
            .position(label)
            .map(|position| self.minutes[position])
    }

    /// `(label, minutes)` pairs in first-seen order.
    pub fn job_minutes(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.minutes.iter().copied())
    }

    /// Sum of all job-code minutes, in label order.
    pub fn total_mins(&self) -> f64 {
        sum_minutes(&self.minutes)
    }
}

impl FlatRecord for PersonAggregate {
    fn fields(&self) -> Vec<(String, Cell)> {
        let mut fields: Vec<(String, Cell)> = self
            .job_minutes()
            .map(|(label, minutes)| (label.to_string(), Cell::Minutes(minutes)))
            .collect();
        fields.push((TOTAL_MINS.to_string(), Cell::Minutes(self.total_mins())));
        fields.push((NAME.to_string(), Cell::from(self.name.as_str())));
        fields
    }
}
