//! 工具模块 - 错误、校验、日志

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::{AppError, ErrorBody};
pub use result::AppResult;
