//! SQL schema for the Roster SQLite store.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! schema revision; future migrations will be gated on it.

/// Full schema DDL; idempotent thanks to `CREATE ... IF NOT EXISTS`.
///
/// `AUTOINCREMENT` keeps SQLite from handing out the id of a deleted row
/// again, so an id addresses at most one record over the store's lifetime.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS departments (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    name    TEXT NOT NULL,
    region  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS employees (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    department_id INTEGER NOT NULL
                  REFERENCES departments(id) ON DELETE CASCADE,
    name          TEXT NOT NULL,
    birthday      TEXT NOT NULL,   -- YYYY-MM-DD
    salary        REAL NOT NULL,
    job           TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS job_history (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    employee_id INTEGER NOT NULL
                REFERENCES employees(id) ON DELETE CASCADE,
    title       TEXT NOT NULL,
    start_date  TEXT NOT NULL,     -- YYYY-MM-DD
    end_date    TEXT NOT NULL,     -- YYYY-MM-DD
    salary      REAL NOT NULL,
    job         TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS employees_department_idx ON employees(department_id);
CREATE INDEX IF NOT EXISTS job_history_employee_idx ON job_history(employee_id);

PRAGMA user_version = 1;
";
