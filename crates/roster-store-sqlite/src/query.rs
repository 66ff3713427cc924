//! Composed reads.
//!
//! A department tree is assembled from three flat queries (departments,
//! employees, job history) that share one [`Scope`] filter, then nested in
//! memory. Every query orders by id, so children keep insertion order inside
//! their parent.

use std::collections::HashMap;

use rusqlite::{Connection, OptionalExtension as _};
use roster_core::{
  EntityKind,
  entity::{Department, Employee, JobHistory},
};

use crate::{
  Result,
  encode::{RawDepartment, RawEmployee, RawJobHistory, table_name},
};

/// Restricts a composed read. `None` fields do not filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scope {
  pub department:  Option<i64>,
  pub employee:    Option<i64>,
  pub job_history: Option<i64>,
}

impl Scope {
  pub fn all() -> Self { Self::default() }

  pub fn department(id: i64) -> Self {
    Self { department: Some(id), ..Self::default() }
  }

  pub fn employee(id: i64) -> Self {
    Self { employee: Some(id), ..Self::default() }
  }

  pub fn job_history(id: i64) -> Self {
    Self { job_history: Some(id), ..Self::default() }
  }
}

// ─── Trees ───────────────────────────────────────────────────────────────────

pub fn departments(conn: &Connection, scope: Scope) -> Result<Vec<Department>> {
  let mut stmt = conn.prepare(
    "SELECT id, name, region
     FROM departments
     WHERE (?1 IS NULL OR id = ?1)
     ORDER BY id",
  )?;
  let raws = stmt
    .query_map(rusqlite::params![scope.department], RawDepartment::from_row)?
    .collect::<rusqlite::Result<Vec<_>>>()?;

  let mut by_department = group_by(employees(conn, scope)?, |e| e.department_id);

  Ok(
    raws
      .into_iter()
      .map(|d| Department {
        employees: by_department.remove(&d.id).unwrap_or_default(),
        id:        d.id,
        name:      d.name,
        region:    d.region,
      })
      .collect(),
  )
}

pub fn employees(conn: &Connection, scope: Scope) -> Result<Vec<Employee>> {
  let mut stmt = conn.prepare(
    "SELECT e.id, e.department_id, d.name, e.name, e.birthday, e.salary, e.job
     FROM employees e
     JOIN departments d ON d.id = e.department_id
     WHERE (?1 IS NULL OR e.department_id = ?1)
       AND (?2 IS NULL OR e.id = ?2)
     ORDER BY e.id",
  )?;
  let raws = stmt
    .query_map(
      rusqlite::params![scope.department, scope.employee],
      RawEmployee::from_row,
    )?
    .collect::<rusqlite::Result<Vec<_>>>()?;

  let mut by_employee = group_by(job_history(conn, scope)?, |h| h.employee_id);

  raws
    .into_iter()
    .map(|e| {
      let history = by_employee.remove(&e.id).unwrap_or_default();
      e.into_employee(history)
    })
    .collect()
}

pub fn job_history(conn: &Connection, scope: Scope) -> Result<Vec<JobHistory>> {
  let mut stmt = conn.prepare(
    "SELECT h.id, h.employee_id, h.title, h.start_date, h.end_date, h.salary, h.job
     FROM job_history h
     JOIN employees e ON e.id = h.employee_id
     WHERE (?1 IS NULL OR e.department_id = ?1)
       AND (?2 IS NULL OR h.employee_id = ?2)
       AND (?3 IS NULL OR h.id = ?3)
     ORDER BY h.id",
  )?;
  let raws = stmt
    .query_map(
      rusqlite::params![scope.department, scope.employee, scope.job_history],
      RawJobHistory::from_row,
    )?
    .collect::<rusqlite::Result<Vec<_>>>()?;

  raws.into_iter().map(RawJobHistory::into_job_history).collect()
}

// ─── Point lookups ───────────────────────────────────────────────────────────

/// Whether a row with primary key `id` exists in `kind`'s table.
pub fn exists(conn: &Connection, kind: EntityKind, id: i64) -> Result<bool> {
  let sql = format!("SELECT 1 FROM {} WHERE id = ?1", table_name(kind));
  Ok(
    conn
      .query_row(&sql, rusqlite::params![id], |_| Ok(()))
      .optional()?
      .is_some(),
  )
}

pub fn department_name(conn: &Connection, id: i64) -> Result<Option<String>> {
  Ok(
    conn
      .query_row(
        "SELECT name FROM departments WHERE id = ?1",
        rusqlite::params![id],
        |r| r.get(0),
      )
      .optional()?,
  )
}

fn group_by<T>(items: Vec<T>, key: impl Fn(&T) -> i64) -> HashMap<i64, Vec<T>> {
  let mut groups: HashMap<i64, Vec<T>> = HashMap::new();
  for item in items {
    groups.entry(key(&item)).or_default().push(item);
  }
  groups
}
