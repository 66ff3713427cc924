//! Entity types: departments, the employees they own, and each employee's
//! job history.
//!
//! Read models are composed trees: a [`Department`] embeds its employees, an
//! [`Employee`] embeds its job history. Write inputs are the flat `*Fields`
//! structs, which carry every mutable field of an entity and are used both
//! for inserts and for whole-record replacement.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─── Kinds ───────────────────────────────────────────────────────────────────

/// The three record types held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
  Department,
  Employee,
  JobHistory,
}

impl fmt::Display for EntityKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Department => "Department",
      Self::Employee => "Employee",
      Self::JobHistory => "Job history",
    })
  }
}

// ─── Read models ─────────────────────────────────────────────────────────────

/// A department together with every employee it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
  /// Store-assigned; never changes and is never reused.
  pub id:        i64,
  pub name:      String,
  pub region:    String,
  /// Ordered by insertion.
  pub employees: Vec<Employee>,
}

/// An employee together with their job history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
  pub id:            i64,
  pub department_id: i64,
  /// Name of the owning department.
  pub department:    String,
  pub name:          String,
  pub birthday:      NaiveDate,
  pub salary:        f64,
  pub job:           String,
  /// Ordered by insertion.
  pub job_history:   Vec<JobHistory>,
}

/// One past or current position held by an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobHistory {
  pub id:          i64,
  pub employee_id: i64,
  pub title:       String,
  pub start_date:  NaiveDate,
  pub end_date:    NaiveDate,
  pub salary:      f64,
  pub job:         String,
}

// ─── Write inputs ────────────────────────────────────────────────────────────

/// Every mutable field of a department.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentFields {
  pub name:   String,
  pub region: String,
}

/// Every mutable field of an employee.
///
/// `department_id` must reference an existing department at write time.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeFields {
  pub department_id: i64,
  pub name:          String,
  pub birthday:      NaiveDate,
  pub salary:        f64,
  pub job:           String,
}

/// Every mutable field of a job-history entry. The owning employee is fixed
/// at creation and is not part of this set.
#[derive(Debug, Clone, PartialEq)]
pub struct JobHistoryFields {
  pub title:      String,
  pub start_date: NaiveDate,
  pub end_date:   NaiveDate,
  pub salary:     f64,
  pub job:        String,
}
