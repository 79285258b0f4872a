use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::AppConfig;
use dotenvy::dotenv;
use service::{runtime, EmployeeStore, JsonFileStore};
use tracing::{debug, error, info};

use crate::routes;
use crate::state::AppState;

/// Build the app state backed by the configured JSON file.
pub fn build_state(cfg: &AppConfig) -> AppState {
    let store: Arc<dyn EmployeeStore> = Arc::new(JsonFileStore::new(&cfg.storage.data_file));
    AppState::new(store)
}

pub fn build_app(state: AppState, cfg: &AppConfig) -> Router {
    routes::build_router(state, &cfg.storage.public_dir)
}

/// Log what is on disk at boot. A failed load is reported but does not stop the server.
async fn log_loaded_employees(state: &AppState, data_file: &str) {
    match state.employees.list().await {
        Ok(employees) => {
            info!(count = employees.len(), %data_file, "employee data loaded");
            for e in &employees {
                debug!(id = e.id, name = %e.name, department = %e.department, basic_salary = e.basic_salary, "employee");
            }
        }
        Err(e) => error!(error = %e, %data_file, "failed to load employee data"),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: load config, build the app and run the HTTP server until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    let cfg = AppConfig::load_or_env()?;
    runtime::ensure_env(&cfg.storage.public_dir, &cfg.storage.data_file).await?;

    let state = build_state(&cfg);
    log_loaded_employees(&state, &cfg.storage.data_file).await;

    let app = build_app(state, &cfg);
    let addr: SocketAddr = cfg.bind_addr().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "payroll server listening at http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
