//! Encoding and decoding helpers between Rust domain types and the plain
//! column values stored in SQLite.
//!
//! Dates are stored as `YYYY-MM-DD` text. Ids and salaries use SQLite's
//! native INTEGER and REAL types.

use chrono::NaiveDate;
use roster_core::{
  EntityKind,
  entity::{Employee, JobHistory},
};

use crate::{Error, Result};

// ─── NaiveDate ───────────────────────────────────────────────────────────────

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── EntityKind ──────────────────────────────────────────────────────────────

pub fn table_name(kind: EntityKind) -> &'static str {
  match kind {
    EntityKind::Department => "departments",
    EntityKind::Employee => "employees",
    EntityKind::JobHistory => "job_history",
  }
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `departments` row.
pub struct RawDepartment {
  pub id:     i64,
  pub name:   String,
  pub region: String,
}

impl RawDepartment {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:     row.get(0)?,
      name:   row.get(1)?,
      region: row.get(2)?,
    })
  }
}

/// Raw values from an `employees` row joined with its department's name.
pub struct RawEmployee {
  pub id:            i64,
  pub department_id: i64,
  pub department:    String,
  pub name:          String,
  pub birthday:      String,
  pub salary:        f64,
  pub job:           String,
}

impl RawEmployee {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:            row.get(0)?,
      department_id: row.get(1)?,
      department:    row.get(2)?,
      name:          row.get(3)?,
      birthday:      row.get(4)?,
      salary:        row.get(5)?,
      job:           row.get(6)?,
    })
  }

  pub fn into_employee(self, job_history: Vec<JobHistory>) -> Result<Employee> {
    Ok(Employee {
      id: self.id,
      department_id: self.department_id,
      department: self.department,
      name: self.name,
      birthday: decode_date(&self.birthday)?,
      salary: self.salary,
      job: self.job,
      job_history,
    })
  }
}

/// Raw values read directly from a `job_history` row.
pub struct RawJobHistory {
  pub id:          i64,
  pub employee_id: i64,
  pub title:       String,
  pub start_date:  String,
  pub end_date:    String,
  pub salary:      f64,
  pub job:         String,
}

impl RawJobHistory {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      employee_id: row.get(1)?,
      title:       row.get(2)?,
      start_date:  row.get(3)?,
      end_date:    row.get(4)?,
      salary:      row.get(5)?,
      job:         row.get(6)?,
    })
  }

  pub fn into_job_history(self) -> Result<JobHistory> {
    Ok(JobHistory {
      id:          self.id,
      employee_id: self.employee_id,
      title:       self.title,
      start_date:  decode_date(&self.start_date)?,
      end_date:    decode_date(&self.end_date)?,
      salary:      self.salary,
      job:         self.job,
    })
  }
}
