//! JSON REST API for Roster.
//!
//! Exposes an axum [`Router`] backed by any
//! [`roster_core::store::RosterStore`]. TLS and transport concerns are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = roster_api::api_router(Arc::new(store));
//! ```

pub mod departments;
pub mod employees;
pub mod error;
pub mod home;
pub mod job_history;
pub mod params;

use std::sync::Arc;

use axum::{
  Json, Router,
  routing::{get, post},
};
use roster_core::store::RosterStore;
use serde_json::{Value, json};

pub use error::ApiError;

/// Build the full API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: RosterStore + 'static,
{
  Router::new()
    // Departments
    .route(
      "/departments",
      get(departments::list::<S>).post(departments::create::<S>),
    )
    .route(
      "/departments/{id}",
      get(departments::get_one::<S>)
        .put(departments::update::<S>)
        .delete(departments::delete::<S>),
    )
    // Employees
    .route(
      "/employees",
      get(employees::list::<S>).post(employees::create::<S>),
    )
    .route(
      "/employees/{id}",
      get(employees::get_one::<S>)
        .put(employees::update::<S>)
        .delete(employees::delete::<S>),
    )
    .route("/employees/{id}/history", post(job_history::create::<S>))
    // Job history
    .route("/jobhistory", get(job_history::list::<S>))
    .route(
      "/jobhistory/{id}",
      get(job_history::get_one::<S>)
        .put(job_history::update::<S>)
        .delete(job_history::delete::<S>),
    )
    // HTML view
    .route("/home", get(home::page::<S>))
    .with_state(store)
}

/// `{"message": text}`, the body of a successful update or delete.
pub(crate) fn message(text: &str) -> Json<Value> {
  Json(json!({ "message": text }))
}

#[cfg(test)]
mod tests;
