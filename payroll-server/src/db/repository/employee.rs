//! Employee Repository
//!
//! Sole reader/writer of the `employee` table. Identifier generation lives
//! here and nowhere else, so every write path mints ids at a single point.

use std::collections::BTreeMap;

use shared::models::{Employee, EmployeeCreate, EmployeeUpdate, SalaryMetric};
use sqlx::SqlitePool;
use uuid::Uuid;

use super::RepoResult;

pub async fn create(pool: &SqlitePool, data: EmployeeCreate) -> RepoResult<Employee> {
    let employee = Employee {
        id: Uuid::new_v4().to_string(),
        full_name: data.full_name,
        job_title: data.job_title,
        country: data.country,
        salary: data.salary,
    };
    sqlx::query(
        "INSERT INTO employee (id, full_name, job_title, country, salary) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&employee.id)
    .bind(&employee.full_name)
    .bind(&employee.job_title)
    .bind(&employee.country)
    .bind(employee.salary)
    .execute(pool)
    .await?;
    Ok(employee)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(
        "SELECT id, full_name, job_title, country, salary FROM employee WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

/// All rows, insertion order (not contractual)
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT id, full_name, job_title, country, salary FROM employee",
    )
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

/// Field-level patch as a single conditional write
///
/// Unsupplied fields keep their prior values via COALESCE; a zero-row match
/// means the id does not exist (`Ok(None)`), including when a concurrent
/// delete wins the race between routing and this statement.
pub async fn update(
    pool: &SqlitePool,
    id: &str,
    data: EmployeeUpdate,
) -> RepoResult<Option<Employee>> {
    // Empty patch is a read, not a write
    if data.is_empty() {
        return find_by_id(pool, id).await;
    }

    let rows = sqlx::query(
        "UPDATE employee SET \
            full_name = COALESCE(?1, full_name), \
            job_title = COALESCE(?2, job_title), \
            country = COALESCE(?3, country), \
            salary = COALESCE(?4, salary) \
         WHERE id = ?5",
    )
    .bind(&data.full_name)
    .bind(&data.job_title)
    .bind(&data.country)
    .bind(data.salary)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Ok(None);
    }
    find_by_id(pool, id).await
}

/// Remove the row if present; deleting a missing id is not an error
pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM employee WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

pub async fn aggregate_by_country(pool: &SqlitePool) -> RepoResult<BTreeMap<String, SalaryMetric>> {
    aggregate_by(pool, "country").await
}

pub async fn aggregate_by_job_title(
    pool: &SqlitePool,
) -> RepoResult<BTreeMap<String, SalaryMetric>> {
    aggregate_by(pool, "job_title").await
}

/// Group salaries by a fixed column and reduce to {min, max, average}
///
/// `column` is one of two compile-time literals above, never caller input.
/// A single GROUP BY statement is a consistent snapshot under SQLite; an
/// empty table yields an empty map.
async fn aggregate_by(
    pool: &SqlitePool,
    column: &str,
) -> RepoResult<BTreeMap<String, SalaryMetric>> {
    let sql = format!(
        "SELECT {column}, MIN(salary), MAX(salary), AVG(salary) FROM employee GROUP BY {column}",
    );
    let rows: Vec<(String, f64, f64, f64)> = sqlx::query_as(&sql).fetch_all(pool).await?;
    Ok(rows
        .into_iter()
        .map(|(key, min, max, average)| (key, SalaryMetric { min, max, average }))
        .collect())
}
