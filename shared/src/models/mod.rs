//! Data models
//!
//! Shared between payroll-server and API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.

pub mod employee;
pub mod salary;

// Re-exports
pub use employee::*;
pub use salary::*;
