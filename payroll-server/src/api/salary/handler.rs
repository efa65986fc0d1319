//! Salary API Handlers

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{SalaryBreakdown, SalaryMetric};

use crate::api::employees::parse_employee_id;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// GET /salary/calculate/:id - 计算税后工资
pub async fn calculate(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SalaryBreakdown>> {
    let id = parse_employee_id(&id)?;
    let breakdown = state
        .salary
        .calculate_net_salary(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))?;
    Ok(Json(breakdown))
}

/// GET /salary/metrics/by-country - 按国家统计 {min, max, average}
pub async fn metrics_by_country(
    State(state): State<ServerState>,
) -> AppResult<Json<BTreeMap<String, SalaryMetric>>> {
    let metrics = state.salary.metrics_by_country().await?;
    Ok(Json(metrics))
}

/// GET /salary/metrics/by-job-title - 按职位统计 {min, max, average}
pub async fn metrics_by_job_title(
    State(state): State<ServerState>,
) -> AppResult<Json<BTreeMap<String, SalaryMetric>>> {
    let metrics = state.salary.metrics_by_job_title().await?;
    Ok(Json(metrics))
}
