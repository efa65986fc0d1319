use crate::core::Config;
use crate::db::DbService;
use crate::services::{EmployeeService, SalaryService, TaxPolicy};
use crate::utils::AppError;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 所有组件在此显式构造并注入：仓储经由服务持有连接池，
/// 没有进程级可变单例，测试可以为每次运行构造独立实例。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | employees | EmployeeService | 员工 CRUD 服务 |
/// | salary | SalaryService | 薪资计算与统计服务 |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub employees: EmployeeService,
    pub salary: SalaryService,
}

impl ServerState {
    /// Open the store named by the config and wire up the services
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = if config.database_path == ":memory:" {
            DbService::in_memory().await?
        } else {
            DbService::open(&config.database_path).await?
        };
        Ok(Self::with_db(config.clone(), db))
    }

    /// Build state around an already-open store (tests use this with
    /// [`DbService::in_memory`])
    pub fn with_db(config: Config, db: DbService) -> Self {
        let employees = EmployeeService::new(db.pool.clone());
        let salary = SalaryService::new(db.pool.clone(), TaxPolicy::builtin());
        Self {
            config,
            employees,
            salary,
        }
    }
}
