//! 统一错误处理
//!
//! 提供应用级错误类型 [`AppError`]，实现 `IntoResponse`，
//! 所有非 2xx 响应使用稳定的错误体：
//!
//! ```json
//! { "error": "Bad Request", "message": "Salary must be a positive number" }
//! ```
//!
//! | 变体 | 状态码 | 说明 |
//! |------|--------|------|
//! | Validation | 400 | 输入校验失败，message 为字段级原因 |
//! | NotFound | 404 | 资源不存在 |
//! | Database | 500 | 存储故障，详情仅写日志，不返回给调用方 |

use axum::extract::rejection::JsonRejection;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::db::repository::RepoError;

/// 错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    /// 校验失败 (400)
    Validation(String),

    #[error("Resource not found: {0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("Database error: {0}")]
    /// 数据库错误 (500)
    Database(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

/// Malformed / mistyped JSON bodies are validation failures, not 422s
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "Bad Request", msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not Found", msg),
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(ErrorBody {
            error: error.to_string(),
            message,
        });

        (status, body).into_response()
    }
}
