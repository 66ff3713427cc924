//! Core types and trait definitions for the Roster staff directory.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Every other crate depends on it.

pub mod entity;
pub mod error;
pub mod store;

pub use entity::EntityKind;
pub use error::{Error, Result};
