//! Handlers for `/employees` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/employees` | `name`, `department_id`, `birthday`, `salary`, `job`; returns 201 + `{id}` |
//! | `GET`    | `/employees` | Every employee with job history |
//! | `GET`    | `/employees/{id}` | 404 if not found |
//! | `PUT`    | `/employees/{id}` | Replaces every field; the department must exist |
//! | `DELETE` | `/employees/{id}` | Also deletes their job history |

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
  entity::{Employee, EmployeeFields},
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
pub struct EmployeeParams {
  pub name:          String,
  pub department_id: i64,
  #[serde(deserialize_with = "params::date")]
  pub birthday:      NaiveDate,
  pub salary:        f64,
  pub job:           String,
}

impl From<EmployeeParams> for EmployeeFields {
  fn from(p: EmployeeParams) -> Self {
    EmployeeFields {
      department_id: p.department_id,
      name:          p.name,
      birthday:      p.birthday,
      salary:        p.salary,
      job:           p.job,
    }
  }
}

/// `POST /employees`
pub async fn create<S: RosterStore>(
  State(store): State<Arc<S>>,
  Params(params): Params<EmployeeParams>,
) -> Result<impl IntoResponse, ApiError> {
  let emp = store
    .create_employee(params.into())
    .await
    .map_err(ApiError::from_store)?;
  tracing::info!(id = emp.id, department_id = emp.department_id, "employee created");
  Ok((StatusCode::CREATED, Json(json!({ "id": emp.id }))))
}

/// `GET /employees`
pub async fn list<S: RosterStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Employee>>, ApiError> {
  let employees = store.list_employees().await.map_err(ApiError::from_store)?;
  Ok(Json(employees))
}

/// `GET /employees/{id}`
pub async fn get_one<S: RosterStore>(
  State(store): State<Arc<S>>,
  Id(id): Id,
) -> Result<Json<Employee>, ApiError> {
  let emp = store
    .get_employee(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| roster_core::Error::NotFound(EntityKind::Employee, id))?;
  Ok(Json(emp))
}

/// `PUT /employees/{id}`
pub async fn update<S: RosterStore>(
  State(store): State<Arc<S>>,
  Id(id): Id,
  Params(params): Params<EmployeeParams>,
) -> Result<Json<Value>, ApiError> {
  store
    .update_employee(id, params.into())
    .await
    .map_err(ApiError::from_store)?;
  tracing::info!(id, "employee updated");
  Ok(message("Employee updated successfully"))
}

/// `DELETE /employees/{id}`
pub async fn delete<S: RosterStore>(
  State(store): State<Arc<S>>,
  Id(id): Id,
) -> Result<Json<Value>, ApiError> {
  store.delete_employee(id).await.map_err(ApiError::from_store)?;
  tracing::info!(id, "employee deleted");
  Ok(message("Employee deleted successfully"))
}
