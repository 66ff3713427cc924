//! The `RosterStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `roster-store-sqlite`).
//! The HTTP layer (`roster-api`) depends on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use crate::entity::{
  Department, DepartmentFields, Employee, EmployeeFields, JobHistory,
  JobHistoryFields,
};

/// Abstraction over a Roster storage backend.
///
/// Every write is atomic: it either applies completely or leaves the store
/// as it was. Deleting a department removes its employees and their job
/// history; deleting an employee removes their job history.
///
/// Reads that address a single record return `None` when it does not exist.
/// Updates and deletes of a missing record fail with
/// [`Error::NotFound`](crate::Error::NotFound); writes that reference a
/// missing parent fail with
/// [`Error::MissingParent`](crate::Error::MissingParent).
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait RosterStore: Send + Sync {
  type Error: std::error::Error + Into<crate::Error> + Send + Sync + 'static;

  // ── Departments ───────────────────────────────────────────────────────

  /// Insert a department. The returned record has no employees.
  fn create_department(
    &self,
    fields: DepartmentFields,
  ) -> impl Future<Output = Result<Department, Self::Error>> + Send + '_;

  /// All departments with their employees and job history, by id.
  fn list_departments(
    &self,
  ) -> impl Future<Output = Result<Vec<Department>, Self::Error>> + Send + '_;

  fn get_department(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Department>, Self::Error>> + Send + '_;

  /// Replace every mutable field of department `id`.
  fn update_department(
    &self,
    id: i64,
    fields: DepartmentFields,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Delete department `id`, its employees, and their job history.
  fn delete_department(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Employees ─────────────────────────────────────────────────────────

  /// Insert an employee into an existing department.
  fn create_employee(
    &self,
    fields: EmployeeFields,
  ) -> impl Future<Output = Result<Employee, Self::Error>> + Send + '_;

  /// All employees with their job history, by id.
  fn list_employees(
    &self,
  ) -> impl Future<Output = Result<Vec<Employee>, Self::Error>> + Send + '_;

  fn get_employee(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + '_;

  /// Replace every mutable field of employee `id`. The new `department_id`
  /// must exist.
  fn update_employee(
    &self,
    id: i64,
    fields: EmployeeFields,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Delete employee `id` and their job history.
  fn delete_employee(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Job history ───────────────────────────────────────────────────────

  /// Record a job-history entry for an existing employee.
  fn create_job_history(
    &self,
    employee_id: i64,
    fields: JobHistoryFields,
  ) -> impl Future<Output = Result<JobHistory, Self::Error>> + Send + '_;

  fn list_job_history(
    &self,
  ) -> impl Future<Output = Result<Vec<JobHistory>, Self::Error>> + Send + '_;

  fn get_job_history(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<JobHistory>, Self::Error>> + Send + '_;

  fn update_job_history(
    &self,
    id: i64,
    fields: JobHistoryFields,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  fn delete_job_history(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
