//! Employee CRUD operations and the email uniqueness rule.

use std::sync::Arc;

use tracing::{debug, info, warn};

use roster_core::error::AppError;
use roster_database::repositories::EmployeeRepository;
use roster_entity::employee::{Employee, EmployeeDraft};

/// Handles employee lifecycle operations.
///
/// Creation is the only operation with a business rule: the email must not
/// belong to an existing employee. Every other call passes through to the
/// repository unchanged.
#[derive(Debug, Clone)]
pub struct EmployeeService {
    /// Employee repository.
    employee_repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    /// Creates a new employee service.
    pub fn new(employee_repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { employee_repo }
    }

    /// Creates an employee, rejecting emails that are already in use.
    ///
    /// On a duplicate the repository insert is never called.
    pub async fn save_employee(&self, draft: EmployeeDraft) -> Result<Employee, AppError> {
        if let Some(existing) = self.employee_repo.find_by_email(&draft.email).await? {
            warn!(
                email = %draft.email,
                existing_id = existing.id,
                "Rejected employee with duplicate email"
            );
            return Err(AppError::already_exists("Employee", "email", &draft.email));
        }

        let employee = self.employee_repo.insert(&draft).await?;

        info!(employee_id = employee.id, email = %employee.email, "Employee created");

        Ok(employee)
    }

    /// Lists every employee in id order.
    pub async fn get_all_employees(&self) -> Result<Vec<Employee>, AppError> {
        let employees = self.employee_repo.find_all().await?;
        debug!(count = employees.len(), "Listed employees");
        Ok(employees)
    }

    /// Gets a single employee, or `None` if the id is unknown.
    pub async fn get_employee_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        self.employee_repo.find_by_id(&id).await
    }

    /// Persists every field of an existing employee.
    ///
    /// Email uniqueness is not re-checked here; the store still refuses a
    /// write that collides with another employee.
    pub async fn update_employee(&self, employee: Employee) -> Result<Employee, AppError> {
        let updated = self.employee_repo.save(&employee).await?;

        info!(employee_id = updated.id, "Employee updated");

        Ok(updated)
    }

    /// Deletes an employee. Unknown ids are not an error.
    pub async fn delete_employee(&self, id: i64) -> Result<(), AppError> {
        let removed = self.employee_repo.delete_by_id(&id).await?;

        if removed {
            info!(employee_id = id, "Employee deleted");
        } else {
            debug!(employee_id = id, "Delete of unknown employee ignored");
        }

        Ok(())
    }

    /// Finds an employee by exact first and last name.
    pub async fn find_employee_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, AppError> {
        self.employee_repo.find_by_name(first_name, last_name).await
    }

    /// Reports whether the employee store is reachable.
    pub async fn store_healthy(&self) -> bool {
        match self.employee_repo.health_check().await {
            Ok(healthy) => healthy,
            Err(e) => {
                warn!(error = %e, "Employee store health check failed");
                false
            }
        }
    }
}
