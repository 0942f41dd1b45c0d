//! # roster-entity
//!
//! Domain entity models for Roster. Every struct in this crate represents
//! a database table row or a payload used to create one. Stored entities
//! derive `sqlx::FromRow` and serialize with camelCase field names.

pub mod employee;

pub use employee::{Employee, EmployeeDraft};
