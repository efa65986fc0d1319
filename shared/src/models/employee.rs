//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee record as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// UUID v4, generated by the repository on create
    pub id: String,
    pub full_name: String,
    pub job_title: String,
    /// 2-letter ISO-style country code
    pub country: String,
    /// Gross salary, pre-deduction
    pub salary: f64,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub full_name: String,
    pub job_title: String,
    pub country: String,
    pub salary: f64,
}

/// Update employee payload — all fields optional, empty patch is a no-op
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub full_name: Option<String>,
    pub job_title: Option<String>,
    pub country: Option<String>,
    pub salary: Option<f64>,
}

impl EmployeeUpdate {
    /// True when the patch carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.job_title.is_none()
            && self.country.is_none()
            && self.salary.is_none()
    }
}
