//! # roster-database
//!
//! Persistence gateway for Roster: the [`EmployeeRepository`] trait, its
//! PostgreSQL and in-memory implementations, and [`EmployeeStore`], which
//! picks one from configuration and owns the connection pool and schema
//! migrations.

pub mod provider;
pub mod repositories;

pub use provider::EmployeeStore;
pub use repositories::{EmployeeRepository, MemoryEmployeeRepository, PgEmployeeRepository};
