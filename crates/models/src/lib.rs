//! Domain types for the payroll record manager.
//! - `employee`: the persisted entity and the untyped input accepted from forms/JSON.
//! - `errors`: validation failures produced at the parse boundary.

pub mod employee;
pub mod errors;

pub use employee::{Employee, EmployeeFields, EmployeeInput, SalaryValue, DEFAULT_DEPARTMENT};
pub use errors::ValidationError;
