//! Service layer for the payroll record manager.
//! - `storage`: whole-collection persistence behind the `EmployeeStore` trait.
//! - `employee_service`: validation, identity assignment and CRUD over the collection.
//! - Every operation is load -> mutate in memory -> save; nothing is cached between calls.

pub mod errors;
pub mod ids;
pub mod runtime;
pub mod storage;
pub mod employee_service;
#[cfg(test)]
pub mod test_support;

pub use employee_service::EmployeeService;
pub use errors::{ServiceError, StoreError};
pub use storage::{json_file_store::JsonFileStore, memory_store::MemoryStore, EmployeeStore};
