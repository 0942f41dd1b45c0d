//! # roster-core
//!
//! Core crate for Roster. Contains the configuration schemas, the generic
//! repository trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Roster crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
