//! Error taxonomy shared by every store backend.
//!
//! Backends define their own error types and convert into this one, so the
//! HTTP layer can tell a missing record from a dangling reference from a
//! storage fault without knowing which backend produced it.

use thiserror::Error;

use crate::EntityKind;

#[derive(Debug, Error)]
pub enum Error {
  /// The addressed record does not exist.
  #[error("{0} {1} not found")]
  NotFound(EntityKind, i64),

  /// A write referenced a parent record that does not exist.
  #[error("{kind} {id} does not exist")]
  MissingParent { kind: EntityKind, id: i64 },

  /// Constraint violation, connection fault, or any other storage failure.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
