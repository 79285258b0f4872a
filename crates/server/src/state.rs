use std::sync::Arc;

use service::{EmployeeService, EmployeeStore};

/// Shared handler state. Cheap to clone; the service itself is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub employees: Arc<EmployeeService>,
}

impl AppState {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { employees: Arc::new(EmployeeService::new(store)) }
    }
}
