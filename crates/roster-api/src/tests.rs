//! Router tests against an in-memory `SqliteStore`.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode, header},
};
use roster_store_sqlite::SqliteStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;

use crate::api_router;

async fn app() -> Router {
  let store = SqliteStore::open_in_memory().await.unwrap();
  api_router(Arc::new(store))
}

async fn send_raw(
  app: &Router,
  method: &str,
  uri: &str,
  body: Option<Value>,
) -> (StatusCode, String) {
  let builder = Request::builder().method(method).uri(uri);
  let req = match body {
    Some(json) => builder
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(json.to_string()))
      .unwrap(),
    None => builder.body(Body::empty()).unwrap(),
  };
  let resp = app.clone().oneshot(req).await.unwrap();
  let status = resp.status();
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
    .await
    .unwrap();
  (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn send(
  app: &Router,
  method: &str,
  uri: &str,
  body: Option<Value>,
) -> (StatusCode, Value) {
  let (status, text) = send_raw(app, method, uri, body).await;
  let json = serde_json::from_str(&text)
    .unwrap_or_else(|e| panic!("non-JSON body {text:?}: {e}"));
  (status, json)
}

async fn seed_department(app: &Router, name: &str) -> i64 {
  let (status, body) = send(
    app,
    "POST",
    "/departments",
    Some(json!({ "name": name, "region": "West" })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED, "{body}");
  body["id"].as_i64().unwrap()
}

async fn seed_employee(app: &Router, department_id: i64, name: &str) -> i64 {
  let (status, body) = send(
    app,
    "POST",
    "/employees",
    Some(json!({
      "name": name,
      "department_id": department_id,
      "birthday": "1990-01-01",
      "salary": 90000,
      "job": "SWE",
    })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED, "{body}");
  body["id"].as_i64().unwrap()
}

async fn seed_history(app: &Router, employee_id: i64, title: &str) -> i64 {
  let (status, body) = send(
    app,
    "POST",
    &format!("/employees/{employee_id}/history"),
    Some(json!({
      "title": title,
      "start_date": "2019-01-01",
      "end_date": "2020-01-01",
      "salary": 70000.5,
      "job": "SWE",
    })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED, "{body}");
  body["id"].as_i64().unwrap()
}

// ─── End to end ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn department_delete_removes_its_employees() {
  let app = app().await;

  let (status, body) =
    send(&app, "POST", "/departments?name=Eng&region=West", None).await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(body, json!({ "id": 1, "name": "Eng", "region": "West" }));

  let (status, body) = send(
    &app,
    "POST",
    "/employees?name=Ann&department_id=1&birthday=1990-01-01&salary=90000&job=SWE",
    None,
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(body, json!({ "id": 1 }));

  let (status, body) = send(&app, "DELETE", "/departments/1", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["message"], "Department deleted successfully");

  let (status, body) = send(&app, "GET", "/employees/1", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert!(body["error"].as_str().unwrap().contains("Employee"), "{body}");
}

// ─── Departments ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_department_embeds_employees_and_history() {
  let app = app().await;
  let dept = seed_department(&app, "Eng").await;
  let ann = seed_employee(&app, dept, "Ann").await;
  seed_history(&app, ann, "Intern").await;

  let (status, body) = send(&app, "GET", &format!("/departments/{dept}"), None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["name"], "Eng");
  assert_eq!(body["region"], "West");

  let employee = &body["employees"][0];
  assert_eq!(employee["name"], "Ann");
  assert_eq!(employee["department"], "Eng");
  assert_eq!(employee["birthday"], "1990-01-01");
  assert_eq!(employee["salary"], 90000.0);

  let entry = &employee["job_history"][0];
  assert_eq!(entry["title"], "Intern");
  assert_eq!(entry["start_date"], "2019-01-01");
  assert_eq!(entry["end_date"], "2020-01-01");
  assert_eq!(entry["salary"], 70000.5);
}

#[tokio::test]
async fn new_department_has_no_employees() {
  let app = app().await;
  let dept = seed_department(&app, "Eng").await;

  let (_, body) = send(&app, "GET", &format!("/departments/{dept}"), None).await;
  assert_eq!(body["employees"], json!([]));
}

#[tokio::test]
async fn list_departments_has_nested_shape() {
  let app = app().await;
  for d in 0..2 {
    let dept = seed_department(&app, &format!("D{d}")).await;
    for e in 0..3 {
      let emp = seed_employee(&app, dept, &format!("D{d}E{e}")).await;
      for h in 0..2 {
        seed_history(&app, emp, &format!("H{h}")).await;
      }
    }
  }

  let (status, body) = send(&app, "GET", "/departments", None).await;
  assert_eq!(status, StatusCode::OK);
  let departments = body.as_array().unwrap();
  assert_eq!(departments.len(), 2);
  for (d, dept) in departments.iter().enumerate() {
    assert_eq!(dept["name"], format!("D{d}"));
    let employees = dept["employees"].as_array().unwrap();
    assert_eq!(employees.len(), 3);
    for (e, emp) in employees.iter().enumerate() {
      assert_eq!(emp["name"], format!("D{d}E{e}"));
      assert_eq!(emp["job_history"].as_array().unwrap().len(), 2);
    }
  }
}

#[tokio::test]
async fn update_department_replaces_fields() {
  let app = app().await;
  let dept = seed_department(&app, "Eng").await;

  let (status, body) = send(
    &app,
    "PUT",
    &format!("/departments/{dept}?name=Ops&region=East"),
    None,
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["message"], "Department updated successfully");

  let (_, body) = send(&app, "GET", &format!("/departments/{dept}"), None).await;
  assert_eq!(body["name"], "Ops");
  assert_eq!(body["region"], "East");
}

#[tokio::test]
async fn missing_department_is_404_everywhere() {
  let app = app().await;
  let update = Some(json!({ "name": "X", "region": "Y" }));

  for (method, body) in [("GET", None), ("PUT", update), ("DELETE", None)] {
    let (status, body) = send(&app, method, "/departments/9", body).await;
    assert_eq!(status, StatusCode::NOT_FOUND, "{method}");
    assert_eq!(body["error"], "Department 9 not found");
  }
}

// ─── Employees ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_employee_with_missing_department_is_rejected() {
  let app = app().await;

  let (status, body) = send(
    &app,
    "POST",
    "/employees?name=Ghost&department_id=42&birthday=1990-01-01&salary=1&job=None",
    None,
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].as_str().unwrap().contains("Department 42"), "{body}");

  let (_, body) = send(&app, "GET", "/employees", None).await;
  assert_eq!(body, json!([]));
}

#[tokio::test]
async fn update_missing_employee_is_404_and_changes_nothing() {
  let app = app().await;
  let dept = seed_department(&app, "Eng").await;
  seed_employee(&app, dept, "Ann").await;
  let (_, before) = send(&app, "GET", "/employees", None).await;

  let (status, _) = send(
    &app,
    "PUT",
    "/employees/500",
    Some(json!({
      "name": "Nobody",
      "department_id": dept,
      "birthday": "2000-01-01",
      "salary": 1,
      "job": "None",
    })),
  )
  .await;
  assert_eq!(status, StatusCode::NOT_FOUND);

  let (_, after) = send(&app, "GET", "/employees", None).await;
  assert_eq!(before, after);
}

#[tokio::test]
async fn list_employees_reports_department_name() {
  let app = app().await;
  let dept = seed_department(&app, "Eng").await;
  seed_employee(&app, dept, "Ann").await;

  let (status, body) = send(&app, "GET", "/employees", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body[0]["department_id"], dept);
  assert_eq!(body[0]["department"], "Eng");
  assert_eq!(body[0]["job_history"], json!([]));
}

#[tokio::test]
async fn datetime_input_is_truncated_to_a_date() {
  let app = app().await;
  let dept = seed_department(&app, "Eng").await;

  let (status, body) = send(
    &app,
    "POST",
    &format!(
      "/employees?name=Ann&department_id={dept}&birthday=1990-01-01T08:30:00&salary=1&job=SWE"
    ),
    None,
  )
  .await;
  assert_eq!(status, StatusCode::CREATED, "{body}");

  let id = body["id"].as_i64().unwrap();
  let (_, body) = send(&app, "GET", &format!("/employees/{id}"), None).await;
  assert_eq!(body["birthday"], "1990-01-01");
}

// ─── Job history ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_job_history_twice() {
  let app = app().await;
  let dept = seed_department(&app, "Eng").await;
  let ann = seed_employee(&app, dept, "Ann").await;
  let entry = seed_history(&app, ann, "Intern").await;

  let (status, body) = send(&app, "DELETE", &format!("/jobhistory/{entry}"), None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["message"], "Job history deleted successfully");

  let (status, body) = send(&app, "DELETE", &format!("/jobhistory/{entry}"), None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert!(body["error"].as_str().unwrap().contains("Job history"), "{body}");
}

#[tokio::test]
async fn history_for_missing_employee_is_404() {
  let app = app().await;
  let (status, body) = send(
    &app,
    "POST",
    "/employees/77/history?title=T&start_date=2020-01-01&end_date=2020-02-01&salary=1&job=J",
    None,
  )
  .await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body["error"], "Employee 77 not found");
}

#[tokio::test]
async fn update_and_get_job_history() {
  let app = app().await;
  let dept = seed_department(&app, "Eng").await;
  let ann = seed_employee(&app, dept, "Ann").await;
  let entry = seed_history(&app, ann, "Intern").await;

  let (status, _) = send(
    &app,
    "PUT",
    &format!("/jobhistory/{entry}"),
    Some(json!({
      "title": "Engineer",
      "start_date": "2020-01-01",
      "end_date": "2022-12-31",
      "salary": 120000,
      "job": "Backend",
    })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);

  let (status, body) = send(&app, "GET", &format!("/jobhistory/{entry}"), None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["employee_id"], ann);
  assert_eq!(body["title"], "Engineer");
  assert_eq!(body["end_date"], "2022-12-31");

  let (_, list) = send(&app, "GET", "/jobhistory", None).await;
  assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_employee_removes_history() {
  let app = app().await;
  let dept = seed_department(&app, "Eng").await;
  let ann = seed_employee(&app, dept, "Ann").await;
  let entry = seed_history(&app, ann, "Intern").await;

  let (status, _) = send(&app, "DELETE", &format!("/employees/{ann}"), None).await;
  assert_eq!(status, StatusCode::OK);

  let (status, _) = send(&app, "GET", &format!("/jobhistory/{entry}"), None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

// ─── Request decoding ────────────────────────────────────────────────────────

#[tokio::test]
async fn non_numeric_id_is_a_bad_request() {
  let app = app().await;
  let (status, body) = send(&app, "GET", "/departments/abc", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].is_string());
}

#[tokio::test]
async fn malformed_date_is_a_bad_request() {
  let app = app().await;
  let dept = seed_department(&app, "Eng").await;

  let (status, body) = send(
    &app,
    "POST",
    "/employees",
    Some(json!({
      "name": "Ann",
      "department_id": dept,
      "birthday": "01/01/1990",
      "salary": 1,
      "job": "SWE",
    })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].as_str().unwrap().contains("invalid date"), "{body}");
}

#[tokio::test]
async fn missing_field_is_a_bad_request() {
  let app = app().await;
  let (status, body) = send(&app, "POST", "/departments?name=Eng", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].as_str().unwrap().contains("region"), "{body}");

  let (status, _) = send(&app, "POST", "/departments", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ─── HTML view ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn home_lists_everything_escaped() {
  let app = app().await;
  let dept = seed_department(&app, "<R&D>").await;
  let ann = seed_employee(&app, dept, "Ann").await;
  seed_history(&app, ann, "Intern").await;

  let (status, html) = send_raw(&app, "GET", "/home", None).await;
  assert_eq!(status, StatusCode::OK);
  assert!(html.contains("<li>&lt;R&amp;D&gt; (West)</li>"), "{html}");
  assert!(html.contains("<li>Ann - SWE - 90000</li>"), "{html}");
  assert!(html.contains("<li>Intern (2019-01-01 - 2020-01-01)</li>"), "{html}");
}
