//! Employee management service.

pub mod service;

pub use service::EmployeeService;
