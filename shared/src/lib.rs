//! Shared data models
//!
//! DTOs exchanged between payroll-server and its API clients. Wire names
//! are camelCase; Rust fields stay snake_case.

pub mod models;

pub use models::*;
