//! PostgreSQL employee repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use roster_core::error::{AppError, ErrorKind};
use roster_core::result::AppResult;
use roster_core::traits::Repository;
use roster_entity::employee::{Employee, EmployeeDraft};

use super::EmployeeRepository;

const COLUMNS: &str = "id, first_name, last_name, email";

/// Repository for employee CRUD and query operations backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    /// Create a new employee repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a failed INSERT/UPDATE, turning the email unique index into a conflict.
fn write_error(e: sqlx::Error, email: &str, action: &'static str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::already_exists("Employee", "email", email)
        }
        _ => AppError::with_source(ErrorKind::Database, action, e),
    }
}

#[async_trait]
impl Repository<Employee, i64> for PgEmployeeRepository {
    async fn find_by_id(&self, id: &i64) -> AppResult<Option<Employee>> {
        sqlx::query_as::<_, Employee>(&format!("SELECT {COLUMNS} FROM employees WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find employee by id", e)
            })
    }

    async fn find_all(&self) -> AppResult<Vec<Employee>> {
        sqlx::query_as::<_, Employee>(&format!("SELECT {COLUMNS} FROM employees ORDER BY id ASC"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list employees", e))
    }

    async fn save(&self, employee: &Employee) -> AppResult<Employee> {
        sqlx::query_as::<_, Employee>(&format!(
            "UPDATE employees SET first_name = $2, last_name = $3, email = $4 \
             WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(employee.id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, &employee.email, "Failed to update employee"))?
        .ok_or_else(|| AppError::not_found(format!("Employee {} not found", employee.id)))
    }

    async fn delete_by_id(&self, id: &i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete employee", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count employees", e)
            })?;
        Ok(count as u64)
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn insert(&self, draft: &EmployeeDraft) -> AppResult<Employee> {
        sqlx::query_as::<_, Employee>(&format!(
            "INSERT INTO employees (first_name, last_name, email) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        ))
        .bind(&draft.first_name)
        .bind(&draft.last_name)
        .bind(&draft.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, &draft.email, "Failed to create employee"))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {COLUMNS} FROM employees \
             WHERE LOWER(email COLLATE \"C\") = LOWER($1 COLLATE \"C\")"
        ))
        .bind(email.trim())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find employee by email", e)
        })
    }

    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> AppResult<Option<Employee>> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {COLUMNS} FROM employees \
             WHERE first_name = $1 AND last_name = $2 \
             ORDER BY id ASC LIMIT 1"
        ))
        .bind(first_name)
        .bind(last_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find employee by name", e)
        })
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}
