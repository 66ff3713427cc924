//! [`SqliteStore`], the SQLite implementation of [`RosterStore`].

use std::path::Path;

use rusqlite::{Connection, TransactionBehavior};
use roster_core::{
  EntityKind,
  entity::{
    Department, DepartmentFields, Employee, EmployeeFields, JobHistory,
    JobHistoryFields,
  },
  store::RosterStore,
};

use crate::{
  Error, Result,
  encode::{encode_date, table_name},
  query::{self, Scope},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Roster store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted. Clones
/// share one connection thread; each operation is a separate transaction
/// that is committed or rolled back before the next one starts.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run `f` inside one transaction. The transaction commits if `f`
  /// succeeds; on any error it is dropped, which rolls it back.
  async fn transact<T, F>(&self, behavior: TransactionBehavior, f: F) -> Result<T>
  where
    F: FnOnce(&Connection) -> Result<T> + Send + 'static,
    T: Send + 'static,
  {
    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction_with_behavior(behavior)?;
        match f(&tx) {
          Ok(value) => {
            tx.commit()?;
            Ok(Ok(value))
          }
          Err(e) => Ok(Err(e)),
        }
      })
      .await?
  }

  async fn read<T, F>(&self, f: F) -> Result<T>
  where
    F: FnOnce(&Connection) -> Result<T> + Send + 'static,
    T: Send + 'static,
  {
    self.transact(TransactionBehavior::Deferred, f).await
  }

  async fn write<T, F>(&self, f: F) -> Result<T>
  where
    F: FnOnce(&Connection) -> Result<T> + Send + 'static,
    T: Send + 'static,
  {
    self.transact(TransactionBehavior::Immediate, f).await
  }

  /// Row count of `kind`'s table.
  #[cfg(test)]
  pub(crate) async fn count(&self, kind: EntityKind) -> Result<i64> {
    self
      .read(move |conn| {
        let sql = format!("SELECT COUNT(*) FROM {}", table_name(kind));
        Ok(conn.query_row(&sql, [], |r| r.get(0))?)
      })
      .await
  }
}

/// Delete row `id` of `kind`; dependents go with it via `ON DELETE CASCADE`.
fn delete_row(conn: &Connection, kind: EntityKind, id: i64) -> Result<()> {
  let sql = format!("DELETE FROM {} WHERE id = ?1", table_name(kind));
  match conn.execute(&sql, rusqlite::params![id])? {
    0 => Err(Error::NotFound(kind, id)),
    _ => Ok(()),
  }
}

// ─── RosterStore impl ────────────────────────────────────────────────────────

impl RosterStore for SqliteStore {
  type Error = Error;

  // ── Departments ───────────────────────────────────────────────────────────

  async fn create_department(&self, fields: DepartmentFields) -> Result<Department> {
    self
      .write(move |conn| {
        conn.execute(
          "INSERT INTO departments (name, region) VALUES (?1, ?2)",
          rusqlite::params![fields.name, fields.region],
        )?;
        Ok(Department {
          id:        conn.last_insert_rowid(),
          name:      fields.name,
          region:    fields.region,
          employees: Vec::new(),
        })
      })
      .await
  }

  async fn list_departments(&self) -> Result<Vec<Department>> {
    self.read(|conn| query::departments(conn, Scope::all())).await
  }

  async fn get_department(&self, id: i64) -> Result<Option<Department>> {
    self
      .read(move |conn| {
        Ok(query::departments(conn, Scope::department(id))?.into_iter().next())
      })
      .await
  }

  async fn update_department(&self, id: i64, fields: DepartmentFields) -> Result<()> {
    self
      .write(move |conn| {
        let changed = conn.execute(
          "UPDATE departments SET name = ?1, region = ?2 WHERE id = ?3",
          rusqlite::params![fields.name, fields.region, id],
        )?;
        if changed == 0 {
          return Err(Error::NotFound(EntityKind::Department, id));
        }
        Ok(())
      })
      .await
  }

  async fn delete_department(&self, id: i64) -> Result<()> {
    self
      .write(move |conn| delete_row(conn, EntityKind::Department, id))
      .await
  }

  // ── Employees ─────────────────────────────────────────────────────────────

  async fn create_employee(&self, fields: EmployeeFields) -> Result<Employee> {
    self
      .write(move |conn| {
        let department = query::department_name(conn, fields.department_id)?
          .ok_or(Error::MissingParent {
            kind: EntityKind::Department,
            id:   fields.department_id,
          })?;

        conn.execute(
          "INSERT INTO employees (department_id, name, birthday, salary, job)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![
            fields.department_id,
            fields.name,
            encode_date(fields.birthday),
            fields.salary,
            fields.job,
          ],
        )?;

        Ok(Employee {
          id: conn.last_insert_rowid(),
          department_id: fields.department_id,
          department,
          name: fields.name,
          birthday: fields.birthday,
          salary: fields.salary,
          job: fields.job,
          job_history: Vec::new(),
        })
      })
      .await
  }

  async fn list_employees(&self) -> Result<Vec<Employee>> {
    self.read(|conn| query::employees(conn, Scope::all())).await
  }

  async fn get_employee(&self, id: i64) -> Result<Option<Employee>> {
    self
      .read(move |conn| {
        Ok(query::employees(conn, Scope::employee(id))?.into_iter().next())
      })
      .await
  }

  async fn update_employee(&self, id: i64, fields: EmployeeFields) -> Result<()> {
    self
      .write(move |conn| {
        if !query::exists(conn, EntityKind::Employee, id)? {
          return Err(Error::NotFound(EntityKind::Employee, id));
        }
        if !query::exists(conn, EntityKind::Department, fields.department_id)? {
          return Err(Error::MissingParent {
            kind: EntityKind::Department,
            id:   fields.department_id,
          });
        }

        conn.execute(
          "UPDATE employees
           SET department_id = ?1, name = ?2, birthday = ?3, salary = ?4, job = ?5
           WHERE id = ?6",
          rusqlite::params![
            fields.department_id,
            fields.name,
            encode_date(fields.birthday),
            fields.salary,
            fields.job,
            id,
          ],
        )?;
        Ok(())
      })
      .await
  }

  async fn delete_employee(&self, id: i64) -> Result<()> {
    self
      .write(move |conn| delete_row(conn, EntityKind::Employee, id))
      .await
  }

  // ── Job history ───────────────────────────────────────────────────────────

  async fn create_job_history(
    &self,
    employee_id: i64,
    fields:      JobHistoryFields,
  ) -> Result<JobHistory> {
    self
      .write(move |conn| {
        if !query::exists(conn, EntityKind::Employee, employee_id)? {
          return Err(Error::MissingParent {
            kind: EntityKind::Employee,
            id:   employee_id,
          });
        }

        conn.execute(
          "INSERT INTO job_history (employee_id, title, start_date, end_date, salary, job)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            employee_id,
            fields.title,
            encode_date(fields.start_date),
            encode_date(fields.end_date),
            fields.salary,
            fields.job,
          ],
        )?;

        Ok(JobHistory {
          id: conn.last_insert_rowid(),
          employee_id,
          title: fields.title,
          start_date: fields.start_date,
          end_date: fields.end_date,
          salary: fields.salary,
          job: fields.job,
        })
      })
      .await
  }

  async fn list_job_history(&self) -> Result<Vec<JobHistory>> {
    self.read(|conn| query::job_history(conn, Scope::all())).await
  }

  async fn get_job_history(&self, id: i64) -> Result<Option<JobHistory>> {
    self
      .read(move |conn| {
        Ok(query::job_history(conn, Scope::job_history(id))?.into_iter().next())
      })
      .await
  }

  async fn update_job_history(&self, id: i64, fields: JobHistoryFields) -> Result<()> {
    self
      .write(move |conn| {
        let changed = conn.execute(
          "UPDATE job_history
           SET title = ?1, start_date = ?2, end_date = ?3, salary = ?4, job = ?5
           WHERE id = ?6",
          rusqlite::params![
            fields.title,
            encode_date(fields.start_date),
            encode_date(fields.end_date),
            fields.salary,
            fields.job,
            id,
          ],
        )?;
        if changed == 0 {
          return Err(Error::NotFound(EntityKind::JobHistory, id));
        }
        Ok(())
      })
      .await
  }

  async fn delete_job_history(&self, id: i64) -> Result<()> {
    self
      .write(move |conn| delete_row(conn, EntityKind::JobHistory, id))
      .await
  }
}
