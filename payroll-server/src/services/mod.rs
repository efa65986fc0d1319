//! Service Layer
//!
//! - [`EmployeeService`] - employee CRUD orchestration
//! - [`SalaryService`] - TDS calculation and salary metrics

pub mod employee;
pub mod salary;

pub use employee::EmployeeService;
pub use salary::{SalaryService, TaxPolicy};
