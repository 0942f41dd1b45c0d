//! Employee repository trait and its implementations.

pub mod employee;
pub mod memory;

use async_trait::async_trait;

use roster_core::result::AppResult;
use roster_core::traits::Repository;
use roster_entity::employee::{Employee, EmployeeDraft};

pub use employee::PgEmployeeRepository;
pub use memory::MemoryEmployeeRepository;

/// Persistence gateway for employees.
///
/// Extends the generic CRUD [`Repository`] with the employee-specific
/// lookups. Implementations must reject any write that would make two
/// stored employees share an email with a `Conflict` error.
#[async_trait]
pub trait EmployeeRepository: Repository<Employee, i64> + std::fmt::Debug {
    /// Insert a new employee and return it with its assigned id.
    async fn insert(&self, draft: &EmployeeDraft) -> AppResult<Employee>;

    /// Find an employee by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>>;

    /// Find the employee with exactly this first and last name.
    ///
    /// When several employees match, the one with the lowest id is returned.
    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> AppResult<Option<Employee>>;

    /// Check that the backing store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
