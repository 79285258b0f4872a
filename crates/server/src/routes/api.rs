use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use models::{Employee, EmployeeInput};

use crate::errors::JsonApiError;
use crate::state::AppState;

/// List every employee
pub async fn list_employees(State(state): State<AppState>) -> Result<Json<Vec<Employee>>, JsonApiError> {
    Ok(Json(state.employees.list().await?))
}

/// Create an employee
pub async fn create_employee(
    State(state): State<AppState>,
    body: Result<Json<EmployeeInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Employee>), JsonApiError> {
    let Json(input) = body?;
    let created = state.employees.add(&input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Fetch one employee
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, JsonApiError> {
    Ok(Json(state.employees.get(&id).await?))
}

/// Replace name, department and salary of an employee
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<EmployeeInput>, JsonRejection>,
) -> Result<Json<Employee>, JsonApiError> {
    let Json(input) = body?;
    Ok(Json(state.employees.update(&id, &input).await?))
}

/// Delete an employee; unknown ids are not an error
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, JsonApiError> {
    state.employees.remove(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
