use std::sync::Arc;

use models::{Employee, EmployeeInput};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::errors::ServiceError;
use crate::ids::{self, Clock};
use crate::storage::EmployeeStore;

/// Record service: validation and identity assignment over a whole-collection store.
///
/// Every call loads the full collection, mutates it in memory and writes it back.
/// Mutations inside one process are serialized by `write_lock`; a second process
/// writing the same file still races and the last write wins.
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
    write_lock: Mutex<()>,
    clock: Clock,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self::with_clock(store, ids::now_millis)
    }

    pub fn with_clock(store: Arc<dyn EmployeeStore>, clock: Clock) -> Self {
        Self { store, write_lock: Mutex::new(()), clock }
    }

    /// All records in insertion order.
    pub async fn list(&self) -> Result<Vec<Employee>, ServiceError> {
        Ok(self.store.read().await?)
    }

    /// First record whose id string-equals `id`.
    pub async fn get(&self, id: &str) -> Result<Employee, ServiceError> {
        self.store
            .read()
            .await?
            .into_iter()
            .find(|e| e.matches_id(id))
            .ok_or_else(|| ServiceError::not_found("employee", id))
    }

    /// Validate, assign a fresh id, append and persist.
    pub async fn add(&self, input: &EmployeeInput) -> Result<Employee, ServiceError> {
        let fields = input.validate()?;

        let _guard = self.write_lock.lock().await;
        let mut employees = self.store.read().await?;
        let now = (self.clock)();
        let id = ids::next_id(&employees, now).ok_or_else(|| {
            ServiceError::IdsExhausted(employees.iter().map(|e| e.id).max().unwrap_or(now))
        })?;
        let employee = Employee::new(id, fields);
        employees.push(employee.clone());
        self.store.write(&employees).await?;

        info!(employee_id = employee.id, total = employees.len(), "employee added");
        Ok(employee)
    }

    /// Validate, then overwrite every field but `id` of the matching record.
    pub async fn update(&self, id: &str, input: &EmployeeInput) -> Result<Employee, ServiceError> {
        let fields = input.validate()?;

        let _guard = self.write_lock.lock().await;
        let mut employees = self.store.read().await?;
        let existing = employees
            .iter_mut()
            .find(|e| e.matches_id(id))
            .ok_or_else(|| ServiceError::not_found("employee", id))?;
        existing.apply(fields);
        let updated = existing.clone();
        self.store.write(&employees).await?;

        info!(employee_id = updated.id, "employee updated");
        Ok(updated)
    }

    /// Drop every record matching `id` and persist. Returns how many were removed;
    /// zero is still a success.
    pub async fn remove(&self, id: &str) -> Result<usize, ServiceError> {
        let _guard = self.write_lock.lock().await;
        let mut employees = self.store.read().await?;
        let before = employees.len();
        employees.retain(|e| !e.matches_id(id));
        let removed = before - employees.len();
        self.store.write(&employees).await?;

        if removed == 0 {
            debug!(employee_id = %id, "remove: no matching employee");
        } else {
            info!(employee_id = %id, removed, "employee removed");
        }
        Ok(removed)
    }
}
