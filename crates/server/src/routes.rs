use axum::{routing::get, Json, Router};
use tower_http::{
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::state::AppState;

pub mod api;
pub mod pages;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: HTML pages, JSON API, health and static assets.
pub fn build_router(state: AppState, public_dir: &str) -> Router {
    let page_routes = Router::new()
        .route("/", get(pages::index))
        .route("/add", get(pages::add_form).post(pages::add_submit))
        .route("/edit/:id", get(pages::edit_form).post(pages::edit_submit))
        .route("/delete/:id", get(pages::delete));

    let api_routes = Router::new()
        .route("/api/employees", get(api::list_employees).post(api::create_employee))
        .route(
            "/api/employees/:id",
            get(api::get_employee).put(api::update_employee).delete(api::delete_employee),
        );

    page_routes
        .merge(api_routes)
        .route("/health", get(health))
        .fallback_service(ServeDir::new(public_dir))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
