//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use uuid::Uuid;

use crate::api::AppJson;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult, validation};

/// POST /employees - 创建员工 (201)
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    validation::validate_create(&payload)?;
    let employee = state.employees.create_employee(payload).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /employees - 获取所有员工
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employees.get_all_employees().await?;
    Ok(Json(employees))
}

/// GET /employees/:id - 获取单个员工
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let id = parse_employee_id(&id)?;
    let employee = state
        .employees
        .get_employee_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))?;
    Ok(Json(employee))
}

/// PUT /employees/:id - 字段级局部更新；空补丁原样返回现有记录
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    let id = parse_employee_id(&id)?;
    validation::validate_update(&payload)?;
    let employee = state
        .employees
        .update_employee(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))?;
    Ok(Json(employee))
}

/// DELETE /employees/:id - 删除员工 (204)，id 不存在时 404
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_employee_id(&id)?;
    let removed = state.employees.delete_employee(&id).await?;
    if !removed {
        return Err(AppError::not_found(format!("Employee {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Path params must parse as UUIDs; anything else is a 400, not a 404
pub(crate) fn parse_employee_id(raw: &str) -> Result<String, AppError> {
    Uuid::parse_str(raw)
        .map(|id| id.to_string())
        .map_err(|_| AppError::validation("Invalid employee ID format"))
}
