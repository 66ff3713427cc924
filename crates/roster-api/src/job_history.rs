//! Handlers for job-history endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/employees/{id}/history` | `title`, `start_date`, `end_date`, `salary`, `job`; 404 if the employee is missing |
//! | `GET`    | `/jobhistory` | Every entry |
//! | `GET`    | `/jobhistory/{id}` | 404 if not found |
//! | `PUT`    | `/jobhistory/{id}` | Replaces every field except the owning employee |
//! | `DELETE` | `/jobhistory/{id}` | |

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use chrono::NaiveDate;
use roster_core::{
  EntityKind,
  entity::{JobHistory, JobHistoryFields},
  store::RosterStore,
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
  error::ApiError,
  message,
  params::{self, Id, Params},
};

#[derive(Debug, Deserialize)]
pub struct JobHistoryParams {
  pub title:      String,
  #[serde(deserialize_with = "params::date")]
  pub start_date: NaiveDate,
  #[serde(deserialize_with = "params::date")]
  pub end_date:   NaiveDate,
  pub salary:     f64,
  pub job:        String,
}

impl From<JobHistoryParams> for JobHistoryFields {
  fn from(p: JobHistoryParams) -> Self {
    JobHistoryFields {
      title:      p.title,
      start_date: p.start_date,
      end_date:   p.end_date,
      salary:     p.salary,
      job:        p.job,
    }
  }
}

/// `POST /employees/{id}/history`
///
/// The employee is the addressed resource here, so a missing one is a 404
/// rather than a rejected reference.
pub async fn create<S: RosterStore>(
  State(store): State<Arc<S>>,
  Id(employee_id): Id,
  Params(params): Params<JobHistoryParams>,
) -> Result<impl IntoResponse, ApiError> {
  let entry = store
    .create_job_history(employee_id, params.into())
    .await
    .map_err(|e| {
      let e: roster_core::Error = e.into();
      match e {
        roster_core::Error::MissingParent { kind, id } => {
          ApiError::from(roster_core::Error::NotFound(kind, id))
        }
        other => ApiError::from(other),
      }
    })?;
  tracing::info!(id = entry.id, employee_id, "job history recorded");
  Ok((StatusCode::CREATED, Json(json!({ "id": entry.id }))))
}

/// `GET /jobhistory`
pub async fn list<S: RosterStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<JobHistory>>, ApiError> {
  let entries = store.list_job_history().await.map_err(ApiError::from_store)?;
  Ok(Json(entries))
}

/// `GET /jobhistory/{id}`
pub async fn get_one<S: RosterStore>(
  State(store): State<Arc<S>>,
  Id(id): Id,
) -> Result<Json<JobHistory>, ApiError> {
  let entry = store
    .get_job_history(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| roster_core::Error::NotFound(EntityKind::JobHistory, id))?;
  Ok(Json(entry))
}

/// `PUT /jobhistory/{id}`
pub async fn update<S: RosterStore>(
  State(store): State<Arc<S>>,
  Id(id): Id,
  Params(params): Params<JobHistoryParams>,
) -> Result<Json<Value>, ApiError> {
  store
    .update_job_history(id, params.into())
    .await
    .map_err(ApiError::from_store)?;
  tracing::info!(id, "job history updated");
  Ok(message("Job history updated successfully"))
}

/// `DELETE /jobhistory/{id}`
pub async fn delete<S: RosterStore>(
  State(store): State<Arc<S>>,
  Id(id): Id,
) -> Result<Json<Value>, ApiError> {
  store.delete_job_history(id).await.map_err(ApiError::from_store)?;
  tracing::info!(id, "job history deleted");
  Ok(message("Job history deleted successfully"))
}
