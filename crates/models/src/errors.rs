use thiserror::Error;

/// Field validation failures. Messages are shown verbatim when a form is re-displayed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Employee name cannot be empty.")]
    EmptyName,
    #[error("Basic salary must be a non-negative number.")]
    InvalidSalary,
}
