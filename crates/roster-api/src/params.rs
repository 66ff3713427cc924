//! Request extractors that reject with a JSON [`ApiError`] instead of axum's
//! plain-text rejections.
//!
//! Write endpoints take their fields either from the query string or from a
//! JSON body: a non-empty query string wins, otherwise the body is parsed.

use axum::{
  Json,
  extract::{FromRequest, FromRequestParts, Path, Query, Request},
  http::request::Parts,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, de::DeserializeOwned};

use crate::error::ApiError;

// ─── Params ──────────────────────────────────────────────────────────────────

/// Fields of a write request, from the query string or a JSON body.
#[derive(Debug)]
pub struct Params<T>(pub T);

impl<T, S> FromRequest<S> for Params<T>
where
  T: DeserializeOwned + Send,
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    if req.uri().query().is_some_and(|q| !q.is_empty()) {
      let Query(value) = Query::<T>::try_from_uri(req.uri())
        .map_err(|e| ApiError::BadRequest(e.body_text()))?;
      return Ok(Self(value));
    }

    let Json(value) = Json::<T>::from_request(req, state)
      .await
      .map_err(|e| ApiError::BadRequest(e.body_text()))?;
    Ok(Self(value))
  }
}

// ─── Id ──────────────────────────────────────────────────────────────────────

/// The numeric `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct Id(pub i64);

impl<S> FromRequestParts<S> for Id
where
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &S,
  ) -> Result<Self, Self::Rejection> {
    let Path(id) = Path::<i64>::from_request_parts(parts, state)
      .await
      .map_err(|e| ApiError::BadRequest(e.body_text()))?;
    Ok(Self(id))
  }
}

// ─── Dates ───────────────────────────────────────────────────────────────────

/// Parse a calendar date. A trailing time of day is accepted and dropped.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
  let s = s.trim();
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
    .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f").map(|dt| dt.date()))
    .ok()
}

/// `deserialize_with` adapter for [`parse_date`].
pub fn date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
  D: Deserializer<'de>,
{
  let s = String::deserialize(deserializer)?;
  parse_date(&s).ok_or_else(|| {
    serde::de::Error::custom(format!("invalid date {s:?}, expected YYYY-MM-DD"))
  })
}
