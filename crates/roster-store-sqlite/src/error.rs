//! Error type for `roster-store-sqlite`.

use roster_core::EntityKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("sqlite error: {0}")]
  Sqlite(#[from] rusqlite::Error),

  #[error("date parse error: {0}")]
  DateParse(String),

  #[error("{0} {1} not found")]
  NotFound(EntityKind, i64),

  #[error("{kind} {id} does not exist")]
  MissingParent { kind: EntityKind, id: i64 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<Error> for roster_core::Error {
  fn from(e: Error) -> Self {
    match e {
      Error::NotFound(kind, id) => Self::NotFound(kind, id),
      Error::MissingParent { kind, id } => Self::MissingParent { kind, id },
      other => Self::Store(Box::new(other)),
    }
  }
}
