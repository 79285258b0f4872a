use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Department assigned when none (or only whitespace) is submitted.
pub const DEFAULT_DEPARTMENT: &str = "General";

/// A persisted payroll record.
/// - `id` is assigned once at creation and never changes
/// - `name` is trimmed and never empty
/// - `basic_salary` is finite and `>= 0`
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub department: String,
    pub basic_salary: f64,
}

impl Employee {
    pub fn new(id: i64, fields: EmployeeFields) -> Self {
        Self { id, name: fields.name, department: fields.department, basic_salary: fields.basic_salary }
    }

    /// Overwrite every field except `id`.
    pub fn apply(&mut self, fields: EmployeeFields) {
        self.name = fields.name;
        self.department = fields.department;
        self.basic_salary = fields.basic_salary;
    }

    /// Identifiers are matched as strings so a URL path segment addresses the record directly.
    pub fn matches_id(&self, id: &str) -> bool {
        self.id.to_string() == id
    }
}

/// Salary as submitted: JSON clients send a number, HTML forms send text.
/// Any other JSON value is kept so validation can reject it as `InvalidSalary`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum SalaryValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

/// Untyped create/update payload. Nothing here has been checked yet.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub basic_salary: Option<SalaryValue>,
}

/// Validated, normalized employee fields (everything but `id`).
#[derive(Clone, Debug, PartialEq)]
pub struct EmployeeFields {
    pub name: String,
    pub department: String,
    pub basic_salary: f64,
}

impl EmployeeInput {
    pub fn new(name: &str, department: Option<&str>, basic_salary: f64) -> Self {
        Self {
            name: Some(name.to_string()),
            department: department.map(str::to_string),
            basic_salary: Some(SalaryValue::Number(basic_salary)),
        }
    }

    /// Name is checked before salary; only the first failure is reported.
    pub fn validate(&self) -> Result<EmployeeFields, ValidationError> {
        let name = validate_name(self.name.as_deref())?;
        let basic_salary = validate_salary(self.basic_salary.as_ref())?;
        let department = normalize_department(self.department.as_deref());
        Ok(EmployeeFields { name, department, basic_salary })
    }
}

pub fn validate_name(name: Option<&str>) -> Result<String, ValidationError> {
    match name.map(str::trim) {
        Some(n) if !n.is_empty() => Ok(n.to_string()),
        _ => Err(ValidationError::EmptyName),
    }
}

pub fn validate_salary(salary: Option<&SalaryValue>) -> Result<f64, ValidationError> {
    let value = match salary {
        Some(SalaryValue::Number(n)) => *n,
        Some(SalaryValue::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Err(ValidationError::InvalidSalary);
            }
            s.parse::<f64>().map_err(|_| ValidationError::InvalidSalary)?
        }
        Some(SalaryValue::Other(_)) | None => return Err(ValidationError::InvalidSalary),
    };
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidSalary);
    }
    // -0.0 compares equal to 0.0; store it as plain zero
    Ok(if value == 0.0 { 0.0 } else { value })
}

pub fn normalize_department(department: Option<&str>) -> String {
    match department.map(str::trim) {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => DEFAULT_DEPARTMENT.to_string(),
    }
}
