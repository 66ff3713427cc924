//! Handlers for `/departments` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/departments` | `name`, `region`; returns 201 + `{id,name,region}` |
//! | `GET`    | `/departments` | Every department with employees and job history |
//! | `GET`    | `/departments/{id}` | 404 if not found |
//! | `PUT`    | `/departments/{id}` | Replaces `name` and `region` |
//! | `DELETE` | `/departments/{id}` | Also deletes its employees and their history |

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use roster_core::{
  EntityKind,
  entity::{Department, DepartmentFields},
  store::RosterStore,
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
  error::ApiError,
  message,
  params::{Id, Params},
};

#[derive(Debug, Deserialize)]
pub struct DepartmentParams {
  pub name:   String,
  pub region: String,
}

impl From<DepartmentParams> for DepartmentFields {
  fn from(p: DepartmentParams) -> Self {
    DepartmentFields { name: p.name, region: p.region }
  }
}

/// `POST /departments`
pub async fn create<S: RosterStore>(
  State(store): State<Arc<S>>,
  Params(params): Params<DepartmentParams>,
) -> Result<impl IntoResponse, ApiError> {
  let dept = store
    .create_department(params.into())
    .await
    .map_err(ApiError::from_store)?;
  tracing::info!(id = dept.id, "department created");
  Ok((
    StatusCode::CREATED,
    Json(json!({ "id": dept.id, "name": dept.name, "region": dept.region })),
  ))
}

/// `GET /departments`
pub async fn list<S: RosterStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Department>>, ApiError> {
  let departments = store.list_departments().await.map_err(ApiError::from_store)?;
  Ok(Json(departments))
}

/// `GET /departments/{id}`
pub async fn get_one<S: RosterStore>(
  State(store): State<Arc<S>>,
  Id(id): Id,
) -> Result<Json<Department>, ApiError> {
  let dept = store
    .get_department(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| roster_core::Error::NotFound(EntityKind::Department, id))?;
  Ok(Json(dept))
}

/// `PUT /departments/{id}`
pub async fn update<S: RosterStore>(
  State(store): State<Arc<S>>,
  Id(id): Id,
  Params(params): Params<DepartmentParams>,
) -> Result<Json<Value>, ApiError> {
  store
    .update_department(id, params.into())
    .await
    .map_err(ApiError::from_store)?;
  tracing::info!(id, "department updated");
  Ok(message("Department updated successfully"))
}

/// `DELETE /departments/{id}`
pub async fn delete<S: RosterStore>(
  State(store): State<Arc<S>>,
  Id(id): Id,
) -> Result<Json<Value>, ApiError> {
  store.delete_department(id).await.map_err(ApiError::from_store)?;
  tracing::info!(id, "department deleted");
  Ok(message("Department deleted successfully"))
}
