//! Employee Service
//!
//! Pass-through orchestration above the repository: the seam where future
//! business rules (approval flows, deduplication, audit hooks) slot in
//! without changing the repository contract.

use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use sqlx::SqlitePool;

use crate::db::repository::{RepoResult, employee as repo};

#[derive(Clone)]
pub struct EmployeeService {
    pool: SqlitePool,
}

impl EmployeeService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_employee(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        repo::create(&self.pool, data).await
    }

    pub async fn get_employee_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        repo::find_by_id(&self.pool, id).await
    }

    pub async fn get_all_employees(&self) -> RepoResult<Vec<Employee>> {
        repo::find_all(&self.pool).await
    }

    pub async fn update_employee(
        &self,
        id: &str,
        data: EmployeeUpdate,
    ) -> RepoResult<Option<Employee>> {
        repo::update(&self.pool, id, data).await
    }

    pub async fn delete_employee(&self, id: &str) -> RepoResult<bool> {
        repo::delete(&self.pool, id).await
    }
}
