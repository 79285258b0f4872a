#![allow(dead_code)]
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response, StatusCode},
    Router,
};
use server::{routes, state::AppState};
use service::{EmployeeStore, JsonFileStore, MemoryStore};
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub data_file: Option<PathBuf>,
}

impl TestApp {
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()), None)
    }

    /// File-backed app in a fresh temp directory.
    pub fn on_disk() -> Self {
        let path = std::env::temp_dir()
            .join(format!("payroll_http_{}", uuid::Uuid::new_v4()))
            .join("employees.json");
        Self::with_store(Arc::new(JsonFileStore::new(&path)), Some(path))
    }

    pub fn with_store(store: Arc<dyn EmployeeStore>, data_file: Option<PathBuf>) -> Self {
        let state = AppState::new(store);
        let router = routes::build_router(state.clone(), "public-dir-for-tests");
        Self { router, state, data_file }
    }

    pub async fn send(&self, req: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(req).await.expect("router is infallible")
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn post_form(&self, uri: &str, form: &str) -> Response<Body> {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        self.send(req).await
    }

    pub async fn send_json(&self, method: &str, uri: &str, body: serde_json::Value) -> Response<Body> {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(req).await
    }

    pub async fn cleanup(&self) {
        if let Some(dir) = self.data_file.as_ref().and_then(|p| p.parent()) {
            let _ = tokio::fs::remove_dir_all(dir).await;
        }
    }
}

pub async fn body_text(resp: Response<Body>) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

pub async fn body_json(resp: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_text(resp).await).expect("json body")
}

pub fn assert_redirect_home(resp: &Response<Body>) {
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
}
