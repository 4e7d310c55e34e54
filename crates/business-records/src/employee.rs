//! Employee records and the company roster that owns them.
//!
//! Employees are built through named constructors ([`Employee::from_record_str`],
//! [`Employee::from_json`], [`Employee::from_value`]) and registered with a
//! [`Company`], which holds what would otherwise be shared mutable state: the
//! company name and the list of hires.

use calendar_utils::{parse_with_pattern, DateFormatPattern};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{RecordError, Result};
use crate::money::format_currency;

/// Lowest salary accepted by [`Employee::is_valid_salary`].
pub const MIN_SALARY: f64 = 30_000.0;
/// Highest salary accepted by [`Employee::is_valid_salary`].
pub const MAX_SALARY: f64 = 1_000_000.0;

/// Performance rating → bonus fraction of salary.
const BONUS_TIERS: [(f64, f64); 5] = [
    (5.0, 0.20), // outstanding
    (4.0, 0.15), // exceeds expectations
    (3.0, 0.10), // meets expectations
    (2.0, 0.05), // needs improvement
    (1.0, 0.00), // unsatisfactory
];
const DEFAULT_BONUS: f64 = 0.10;

pub const DEFAULT_COMPANY_NAME: &str = "PyRasif";

// ── Employee ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub name: String,
    pub salary: f64,
    pub hire_date: NaiveDateTime,
}

/// Wire shape accepted by [`Employee::from_json`] and [`Employee::from_value`].
#[derive(Debug, Deserialize)]
struct EmployeeRecord {
    name: String,
    salary: f64,
    hire_date: String,
}

impl TryFrom<EmployeeRecord> for Employee {
    type Error = RecordError;

    fn try_from(record: EmployeeRecord) -> Result<Self> {
        let hire_date = parse_iso_timestamp(&record.hire_date)?;
        Ok(Employee::new(record.name, record.salary, hire_date))
    }
}

impl Employee {
    pub fn new(name: impl Into<String>, salary: f64, hire_date: NaiveDateTime) -> Self {
        Self {
            name: name.into(),
            salary,
            hire_date,
        }
    }

    /// Build an employee from a `name-salary-YYYY-MM-DD` line.
    ///
    /// The line is split on the first two dashes, so the name cannot contain one.
    ///
    /// # Errors
    ///
    /// [`RecordError::InvalidRecord`] if the line has fewer than three parts,
    /// [`RecordError::InvalidNumber`] for a non-numeric salary, and
    /// [`RecordError::InvalidDate`] for anything but a strict `YYYY-MM-DD` date.
    ///
    /// # Examples
    ///
    /// ```
    /// use business_records::Employee;
    ///
    /// let bob = Employee::from_record_str("Bob Johnson-65000-2021-06-01").unwrap();
    /// assert_eq!(bob.name, "Bob Johnson");
    /// assert_eq!(bob.salary, 65000.0);
    /// assert_eq!(bob.hire_date.to_string(), "2021-06-01 00:00:00");
    /// ```
    pub fn from_record_str(line: &str) -> Result<Self> {
        let mut parts = line.splitn(3, '-');
        let (Some(name), Some(salary), Some(date)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(RecordError::InvalidRecord(format!(
                "expected 'name-salary-YYYY-MM-DD', got '{line}'"
            )));
        };

        let salary = salary
            .trim()
            .parse::<f64>()
            .map_err(|e| RecordError::InvalidNumber {
                value: salary.to_string(),
                reason: e.to_string(),
            })?;
        let hire_date = parse_with_pattern(date, DateFormatPattern::YearMonthDay)?;

        Ok(Employee::new(name, salary, hire_date))
    }

    /// Build an employee from a JSON object with `name`, `salary` and an ISO
    /// `hire_date` (`2019-03-20`, `2019-03-20T09:30` or `2019-03-20T09:30:00`).
    pub fn from_json(json: &str) -> Result<Self> {
        let record: EmployeeRecord = serde_json::from_str(json)?;
        record.try_into()
    }

    /// Same as [`Employee::from_json`] for an already-decoded value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let record: EmployeeRecord = serde_json::from_value(value)?;
        record.try_into()
    }

    /// Whether `salary` lies within [`MIN_SALARY`]..=[`MAX_SALARY`].
    pub fn is_valid_salary(salary: f64) -> bool {
        (MIN_SALARY..=MAX_SALARY).contains(&salary)
    }

    /// Annual bonus for `salary` at a performance rating from 1.0 to 5.0.
    ///
    /// Ratings other than the five whole-number tiers earn the default 10%.
    pub fn calculate_annual_bonus(salary: f64, performance_rating: f64) -> f64 {
        let fraction = BONUS_TIERS
            .iter()
            .find(|(rating, _)| *rating == performance_rating)
            .map_or(DEFAULT_BONUS, |&(_, fraction)| fraction);
        salary * fraction
    }
}

/// Accepts a bare ISO date or an ISO datetime (minutes or seconds precision)
/// with `T` or space separator.
fn parse_iso_timestamp(text: &str) -> Result<NaiveDateTime> {
    const DATETIME_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    if let Some(ts) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
    {
        return Ok(ts);
    }
    Ok(parse_with_pattern(text, DateFormatPattern::YearMonthDay)?)
}

// ── Company ─────────────────────────────────────────────────────────────────

/// A named roster of employees.
#[derive(Debug, Clone, Serialize)]
pub struct Company {
    name: String,
    employees: Vec<Employee>,
}

impl Default for Company {
    fn default() -> Self {
        Self::new(DEFAULT_COMPANY_NAME)
    }
}

impl Company {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            employees: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the company. Every employee is described under the new name.
    pub fn rename(&mut self, new_name: impl Into<String>) {
        let new_name = new_name.into();
        info!(from = %self.name, to = %new_name, "company renamed");
        self.name = new_name;
    }

    /// Add `employee` to the roster and return the stored record.
    pub fn hire(&mut self, employee: Employee) -> &Employee {
        debug!(company = %self.name, employee = %employee.name, "hired");
        self.employees.push(employee);
        &self.employees[self.employees.len() - 1]
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    /// `Employee('<name>', $<salary>, <company>)`
    pub fn describe(&self, employee: &Employee) -> String {
        format!(
            "Employee('{}', {}, {})",
            employee.name,
            format_currency(employee.salary),
            self.name
        )
    }
}
