//! `GET /home`: a read-only HTML listing of every department, employee,
//! and job-history entry.

use std::{fmt::Write as _, sync::Arc};

use axum::{extract::State, response::Html};
use roster_core::{
  entity::{Department, Employee, JobHistory},
  store::RosterStore,
};

use crate::error::ApiError;

const STYLE: &str =
  "body { font-family: Arial; margin: 40px; } h1 { color: #2c3e50; } ul { margin-bottom: 30px; }";

/// `GET /home`
pub async fn page<S: RosterStore>(
  State(store): State<Arc<S>>,
) -> Result<Html<String>, ApiError> {
  let departments = store.list_departments().await.map_err(ApiError::from_store)?;
  let employees = store.list_employees().await.map_err(ApiError::from_store)?;
  let history = store.list_job_history().await.map_err(ApiError::from_store)?;
  Ok(Html(render(&departments, &employees, &history)))
}

/// Render the three flat listings as one page.
pub fn render(
  departments: &[Department],
  employees: &[Employee],
  history: &[JobHistory],
) -> String {
  let mut html = String::new();
  // Writing into a `String` cannot fail.
  let _ = write!(
    html,
    "<html><head><title>Roster</title><style>{STYLE}</style></head><body>"
  );

  html.push_str("<h1>Departments</h1><ul>");
  for d in departments {
    let _ = write!(html, "<li>{} ({})</li>", escape(&d.name), escape(&d.region));
  }

  html.push_str("</ul><h1>Employees</h1><ul>");
  for e in employees {
    let _ = write!(
      html,
      "<li>{} - {} - {}</li>",
      escape(&e.name),
      escape(&e.job),
      e.salary
    );
  }

  html.push_str("</ul><h1>Job history</h1><ul>");
  for h in history {
    let _ = write!(
      html,
      "<li>{} ({} - {})</li>",
      escape(&h.title),
      h.start_date,
      h.end_date
    );
  }

  html.push_str("</ul></body></html>");
  html
}

fn escape(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      c => out.push(c),
    }
  }
  out
}
