//! Storage abstractions for the service layer
//!
//! The collection is always transferred whole: `read` returns every record in
//! insertion order, `write` replaces the stored snapshot.

use async_trait::async_trait;
use models::Employee;

use crate::errors::StoreError;

pub mod json_file_store;
pub mod memory_store;

/// Durable load/save of the full employee collection.
/// Implementations can be file-backed, in-memory, or a real database.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Load every record. A store that was never written yields an empty list.
    async fn read(&self) -> Result<Vec<Employee>, StoreError>;
    /// Replace the stored collection with `employees`.
    async fn write(&self, employees: &[Employee]) -> Result<(), StoreError>;
}
