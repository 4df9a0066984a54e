//! The pivoted job-code × employee summary.

use super::table::Cell;

/// Header of the job-code label column.
pub const JOB_CODE_HEADER: &str = "Job Code";
/// Header of the per-job-code total column.
pub const JOB_CODE_TOTAL_HEADER: &str = "Job Code Total";
/// Label of the per-employee total row.
pub const EMPLOYEE_TOTAL_LABEL: &str = "Employee Total";

/// Minutes per job code (rows) and employee (columns), with margin totals.
///
/// The grid is dense: a job code an employee never worked holds `0.0`.
/// Row and column order is the order values were first seen in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotMatrix {
    employees: Vec<String>,
    job_codes: Vec<String>,
    cells: Vec<Vec<f64>>,
    row_totals: Vec<f64>,
    column_totals: Vec<f64>,
    grand_total: f64,
}

impl PivotMatrix {
    /// Assembles a matrix from its parts.
    ///
    /// `cells[row][column]` is indexed by job code, then employee. Row totals
    /// are summed here across employees in column order; column totals are
    /// taken as given because they are the employees' own totals.
    pub fn new(
        employees: Vec<String>,
        job_codes: Vec<String>,
        cells: Vec<Vec<f64>>,
        column_totals: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(cells.len(), job_codes.len());
        debug_assert!(cells.iter().all(|row| row.len() == employees.len()));
        debug_assert_eq!(column_totals.len(), employees.len());

        let row_totals = cells.iter().map(|row| sum_minutes(row)).collect();
        let grand_total = sum_minutes(&column_totals);

        Self {
            employees,
            job_codes,
            cells,
            row_totals,
            column_totals,
            grand_total,
        }
    }

    /// Employee names in column order.
    pub fn employees(&self) -> &[String] {
        &self.employees
    }

    /// Job-code labels in row order.
    pub fn job_codes(&self) -> &[String] {
        &self.job_codes
    }

    /// Minutes for `job_code` worked by `employee`.
    pub fn get(&self, job_code: &str, employee: &str) -> Option<f64> {
        let row = self.job_codes.iter().position(|code| code == job_code)?;
        let column = self.employees.iter().position(|name| name == employee)?;
        Some(self.cells[row][column])
    }

    /// Per-job-code totals across employees, in row order.
    pub fn row_totals(&self) -> &[f64] {
        &self.row_totals
    }

    /// Per-employee totals, in column order.
    pub fn column_totals(&self) -> &[f64] {
        &self.column_totals
    }

    /// Sum of all employee totals.
    pub fn grand_total(&self) -> f64 {
        self.grand_total
    }

    /// Renders the matrix as a table: header row, one row per job code,
    /// then the employee totals row.
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        let mut rows = Vec::with_capacity(self.job_codes.len() + 2);

        let mut header = vec![Cell::from(JOB_CODE_HEADER)];
        header.extend(self.employees.iter().map(|name| Cell::from(name.as_str())));
        header.push(Cell::from(JOB_CODE_TOTAL_HEADER));
        rows.push(header);

        for ((job_code, cells), total) in self
            .job_codes
            .iter()
            .zip(&self.cells)
            .zip(&self.row_totals)
        {
            let mut row = vec![Cell::from(job_code.as_str())];
            row.extend(cells.iter().map(|&minutes| Cell::Minutes(minutes)));
            row.push(Cell::Minutes(*total));
            rows.push(row);
        }

        let mut footer = vec![Cell::from(EMPLOYEE_TOTAL_LABEL)];
        footer.extend(self.column_totals.iter().map(|&minutes| Cell::Minutes(minutes)));
        footer.push(Cell::Minutes(self.grand_total));
        rows.push(footer);

        rows
    }
}

/// Sums from `0.0`, so an empty slice totals `0.0` rather than `-0.0`.
pub(crate) fn sum_minutes(minutes: &[f64]) -> f64 {
    minutes.iter().fold(0.0, |total, m| total + m)
}
