//! Input validation helpers
//!
//! Pure schema-level checks for employee payloads. They run before any
//! repository call and never touch the store, so they can be tested in
//! isolation from persistence.

use shared::models::{EmployeeCreate, EmployeeUpdate};

use crate::utils::AppError;

/// Minimum length for full name and job title
pub const MIN_NAME_LEN: usize = 2;

/// Country codes are ISO-style: exactly 2 characters
pub const COUNTRY_CODE_LEN: usize = 2;

/// Validate a create payload — every field required and in range
pub fn validate_create(data: &EmployeeCreate) -> Result<(), AppError> {
    validate_name(&data.full_name, "Full name")?;
    validate_name(&data.job_title, "Job title")?;
    validate_country(&data.country)?;
    validate_salary(data.salary)
}

/// Validate an update payload — same per-field rules, every field optional.
/// An empty patch is valid (a no-op at the repository).
pub fn validate_update(data: &EmployeeUpdate) -> Result<(), AppError> {
    if let Some(full_name) = &data.full_name {
        validate_name(full_name, "Full name")?;
    }
    if let Some(job_title) = &data.job_title {
        validate_name(job_title, "Job title")?;
    }
    if let Some(country) = &data.country {
        validate_country(country)?;
    }
    if let Some(salary) = data.salary {
        validate_salary(salary)?;
    }
    Ok(())
}

fn validate_name(value: &str, field: &str) -> Result<(), AppError> {
    if value.chars().count() < MIN_NAME_LEN {
        return Err(AppError::validation(format!(
            "{field} must be at least {MIN_NAME_LEN} characters long"
        )));
    }
    Ok(())
}

fn validate_country(value: &str) -> Result<(), AppError> {
    if value.chars().count() != COUNTRY_CODE_LEN {
        return Err(AppError::validation(
            "Country must be a 2-character ISO code",
        ));
    }
    Ok(())
}

fn validate_salary(value: f64) -> Result<(), AppError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::validation("Salary must be a positive number"));
    }
    Ok(())
}
