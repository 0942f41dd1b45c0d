//! # roster-service
//!
//! Business logic service layer for Roster.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod employee;

pub use employee::EmployeeService;
