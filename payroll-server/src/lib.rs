//! Payroll Server - employee records and TDS calculation service
//!
//! # Module structure
//!
//! ```text
//! payroll-server/src/
//! ├── core/          # 配置、状态、HTTP 服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # 业务服务层 (员工、薪资)
//! ├── db/            # 数据库层 (SQLite 连接池 + 仓储)
//! └── utils/         # 错误、校验、日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState, app_router};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger;
