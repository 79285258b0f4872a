#![cfg(test)]
use std::path::PathBuf;
use std::sync::Arc;

use models::{Employee, EmployeeInput, SalaryValue};

use crate::errors::StoreError;
use crate::storage::EmployeeStore;

/// Unique `employees.json` path inside its own temp directory.
pub fn temp_path(label: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("payroll_{}_{}", label, uuid::Uuid::new_v4()))
        .join("employees.json")
}

pub fn employee(id: i64, name: &str, department: &str, basic_salary: f64) -> Employee {
    Employee { id, name: name.into(), department: department.into(), basic_salary }
}

/// Form-style input where every field arrives as text.
pub fn form(name: &str, department: &str, basic_salary: &str) -> EmployeeInput {
    EmployeeInput {
        name: Some(name.into()),
        department: Some(department.into()),
        basic_salary: Some(SalaryValue::Text(basic_salary.into())),
    }
}

/// Store whose reads succeed but every write fails.
pub struct ReadOnlyStore(pub Vec<Employee>);

#[async_trait::async_trait]
impl EmployeeStore for ReadOnlyStore {
    async fn read(&self) -> Result<Vec<Employee>, StoreError> {
        Ok(self.0.clone())
    }

    async fn write(&self, _employees: &[Employee]) -> Result<(), StoreError> {
        Err(StoreError::WriteFailed("read-only store".into()))
    }
}

pub fn read_only(employees: Vec<Employee>) -> Arc<dyn EmployeeStore> {
    Arc::new(ReadOnlyStore(employees))
}
