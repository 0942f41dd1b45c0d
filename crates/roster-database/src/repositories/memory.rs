//! In-memory employee repository.
//!
//! Holds every row in a `BTreeMap` keyed by id behind a single `RwLock`.
//! Writes check email uniqueness while holding the write lock, which gives
//! the same guarantee as the unique index in the PostgreSQL schema.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use roster_core::error::AppError;
use roster_core::result::AppResult;
use roster_core::traits::Repository;
use roster_entity::employee::model::email_key;
use roster_entity::employee::{Employee, EmployeeDraft};

use super::EmployeeRepository;

/// Employee repository that keeps all rows in process memory.
#[derive(Debug, Clone)]
pub struct MemoryEmployeeRepository {
    rows: Arc<RwLock<BTreeMap<i64, Employee>>>,
    next_id: Arc<AtomicI64>,
}

impl MemoryEmployeeRepository {
    /// Create an empty repository. Ids start at 1.
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for MemoryEmployeeRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the conflict error if another row (not `own_id`) uses `email`.
fn check_unique(
    rows: &BTreeMap<i64, Employee>,
    email: &str,
    own_id: Option<i64>,
) -> AppResult<()> {
    let key = email_key(email);
    let taken = rows
        .values()
        .any(|e| Some(e.id) != own_id && e.email_key() == key);

    if taken {
        return Err(AppError::already_exists("Employee", "email", email));
    }
    Ok(())
}

#[async_trait]
impl Repository<Employee, i64> for MemoryEmployeeRepository {
    async fn find_by_id(&self, id: &i64) -> AppResult<Option<Employee>> {
        Ok(self.rows.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Employee>> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn save(&self, employee: &Employee) -> AppResult<Employee> {
        let mut rows = self.rows.write().await;

        if !rows.contains_key(&employee.id) {
            return Err(AppError::not_found(format!(
                "Employee {} not found",
                employee.id
            )));
        }
        check_unique(&rows, &employee.email, Some(employee.id))?;

        rows.insert(employee.id, employee.clone());
        debug!(employee_id = employee.id, "Employee row replaced");
        Ok(employee.clone())
    }

    async fn delete_by_id(&self, id: &i64) -> AppResult<bool> {
        Ok(self.rows.write().await.remove(id).is_some())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.rows.read().await.len() as u64)
    }
}

#[async_trait]
impl EmployeeRepository for MemoryEmployeeRepository {
    async fn insert(&self, draft: &EmployeeDraft) -> AppResult<Employee> {
        let mut rows = self.rows.write().await;
        check_unique(&rows, &draft.email, None)?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let employee = Employee::from_draft(id, draft.clone());
        rows.insert(id, employee.clone());

        debug!(employee_id = id, "Employee row inserted");
        Ok(employee)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>> {
        let key = email_key(email);
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|e| e.email_key() == key)
            .cloned())
    }

    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> AppResult<Option<Employee>> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|e| e.first_name == first_name && e.last_name == last_name)
            .cloned())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
