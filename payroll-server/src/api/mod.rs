//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`employees`] - 员工 CRUD 接口
//! - [`salary`] - 薪资计算与统计接口

pub mod employees;
pub mod health;
pub mod salary;

use axum::extract::FromRequest;

use crate::utils::AppError;

/// `axum::Json` with rejections mapped to the stable 400 error body
///
/// Missing or mistyped fields never reach a handler; they surface as
/// `{"error": "Bad Request", "message": ...}` like every other
/// validation failure.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
