use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::ServiceError;
use tracing::error;

use crate::views;

/// JSON error body for `/api/*` routes.
#[derive(Debug, Serialize)]
pub struct JsonApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(v) => Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(v.to_string())),
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            ServiceError::IdsExhausted(_) => {
                error!(error = %e, "employee id assignment failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(e.to_string()))
            }
            ServiceError::Store(store) => {
                error!(error = %store, "employee store failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(store.to_string()))
            }
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // wrong field types or unparsable JSON are the client's input, same as a failed check
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(rejection.body_text()))
            }
            other => Self::new(other.status(), "Invalid Request Body", Some(other.body_text())),
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(self)).into_response()
    }
}

/// Plain HTML error page for the form routes.
#[derive(Debug)]
pub struct PageError {
    pub status: StatusCode,
    pub message: String,
}

impl PageError {
    pub fn not_found() -> Self {
        Self { status: StatusCode::NOT_FOUND, message: "Employee not found.".into() }
    }

    /// Map a service error, prefixing server-side failures with `context`.
    pub fn from_service(context: &str, e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(_) => Self::not_found(),
            ServiceError::Validation(v) => Self { status: StatusCode::BAD_REQUEST, message: v.to_string() },
            ServiceError::IdsExhausted(_) => {
                error!(error = %e, context, "employee id assignment failed");
                Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: format!("{}: {}", context, e) }
            }
            ServiceError::Store(store) => {
                error!(error = %store, context, "employee store failure");
                Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: format!("{}: {}", context, store) }
            }
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        (self.status, Html(views::error_page(&self.message))).into_response()
    }
}
