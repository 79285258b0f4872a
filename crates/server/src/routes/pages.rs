use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use models::EmployeeInput;
use service::ServiceError;

use crate::errors::PageError;
use crate::state::AppState;
use crate::views;

/// GET / - dashboard
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let employees = state
        .employees
        .list()
        .await
        .map_err(|e| PageError::from_service("Server error", e))?;
    Ok(Html(views::index(&employees)))
}

/// GET /add
pub async fn add_form() -> Html<String> {
    Html(views::add_form(&EmployeeInput::default(), None))
}

/// POST /add - on failure the form is shown again with what was submitted
pub async fn add_submit(State(state): State<AppState>, Form(input): Form<EmployeeInput>) -> Response {
    match state.employees.add(&input).await {
        Ok(_) => Redirect::to("/").into_response(),
        Err(ServiceError::Validation(v)) => {
            (StatusCode::BAD_REQUEST, Html(views::add_form(&input, Some(&v.to_string())))).into_response()
        }
        Err(e) => {
            let page = PageError::from_service("Failed to save employee", e);
            (page.status, Html(views::add_form(&input, Some(&page.message)))).into_response()
        }
    }
}

/// GET /edit/:id
pub async fn edit_form(State(state): State<AppState>, Path(id): Path<String>) -> Result<Html<String>, PageError> {
    let employee = state
        .employees
        .get(&id)
        .await
        .map_err(|e| PageError::from_service("Server error", e))?;
    Ok(Html(views::edit_form(&employee, None)))
}

/// POST /edit/:id - validation errors re-render the stored record with the message
pub async fn edit_submit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(input): Form<EmployeeInput>,
) -> Result<Response, PageError> {
    match state.employees.update(&id, &input).await {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(ServiceError::Validation(v)) => {
            let stored = state
                .employees
                .get(&id)
                .await
                .map_err(|e| PageError::from_service("Server error", e))?;
            Ok((StatusCode::BAD_REQUEST, Html(views::edit_form(&stored, Some(&v.to_string())))).into_response())
        }
        Err(e) => Err(PageError::from_service("Update failed", e)),
    }
}

/// GET /delete/:id - deleting an unknown id still lands back on the list
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Redirect, PageError> {
    state
        .employees
        .remove(&id)
        .await
        .map_err(|e| PageError::from_service("Delete failed", e))?;
    Ok(Redirect::to("/"))
}
