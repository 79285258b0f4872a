use async_trait::async_trait;
use models::Employee;
use tokio::sync::RwLock;

use crate::errors::StoreError;
use crate::storage::EmployeeStore;

/// Process-local store; contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Vec<Employee>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employees(employees: Vec<Employee>) -> Self {
        Self { inner: RwLock::new(employees) }
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn read(&self) -> Result<Vec<Employee>, StoreError> {
        Ok(self.inner.read().await.clone())
    }

    async fn write(&self, employees: &[Employee]) -> Result<(), StoreError> {
        let mut guard = self.inner.write().await;
        *guard = employees.to_vec();
        Ok(())
    }
}
