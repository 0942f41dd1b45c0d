//! Employee CRUD handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use roster_core::error::AppError;
use roster_entity::employee::Employee;

use crate::dto::request::{EmployeeRequest, NameQuery};
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

fn not_found(id: i64) -> ApiError {
    AppError::not_found(format!("Employee {id} not found")).into()
}

/// POST /api/employees
pub async fn create_employee(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<EmployeeRequest>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let employee = state
        .employee_service
        .save_employee(req.into_draft())
        .await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /api/employees
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = state.employee_service.get_all_employees().await?;
    Ok(Json(employees))
}

/// GET /api/employees/{id}
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Employee>, ApiError> {
    state
        .employee_service
        .get_employee_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// PUT /api/employees/{id}
///
/// Loads the stored employee, overwrites all three fields with the body,
/// and saves it under the same id.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<EmployeeRequest>,
) -> Result<Json<Employee>, ApiError> {
    let mut employee = state
        .employee_service
        .get_employee_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    employee.apply(req.into_draft());

    let updated = state.employee_service.update_employee(employee).await?;
    Ok(Json(updated))
}

/// DELETE /api/employees/{id}
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.employee_service.delete_employee(id).await?;
    Ok(StatusCode::OK)
}

/// GET /api/employees/search?firstName=..&lastName=..
pub async fn find_by_name(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> Result<Json<Employee>, ApiError> {
    state
        .employee_service
        .find_employee_by_name(&query.first_name, &query.last_name)
        .await?
        .map(Json)
        .ok_or_else(|| {
            AppError::not_found(format!(
                "No employee named {} {}",
                query.first_name, query.last_name
            ))
            .into()
        })
}
