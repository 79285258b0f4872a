//! Server-side HTML for the payroll pages.
//!
//! Pages are small enough that plain `format!` does the job. Every piece of
//! user-supplied text goes through [`escape`] before it lands in markup.

use std::fmt::Write as _;

use models::{Employee, EmployeeInput, SalaryValue};

/// Escape text for use in HTML element content and quoted attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/style.css">
</head>
<body>
<header><a href="/">Payroll</a></header>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

fn error_banner(error: Option<&str>) -> String {
    match error {
        Some(msg) => format!(r#"<p class="error" role="alert">{}</p>"#, escape(msg)),
        None => String::new(),
    }
}

fn format_salary(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Dashboard listing every employee in stored order.
pub fn index(employees: &[Employee]) -> String {
    let mut body = String::from("<h1>Employees</h1>\n<p><a class=\"button\" href=\"/add\">Add employee</a></p>\n");
    if employees.is_empty() {
        body.push_str("<p class=\"empty\">No employees yet.</p>\n");
        return layout("Payroll", &body);
    }

    body.push_str(
        "<table>\n<thead><tr><th>Name</th><th>Department</th><th>Basic salary</th><th></th></tr></thead>\n<tbody>\n",
    );
    for e in employees {
        let _ = writeln!(
            body,
            r#"<tr><td>{name}</td><td>{dept}</td><td class="num">{salary}</td><td><a href="/edit/{id}">Edit</a> <a href="/delete/{id}" class="danger">Delete</a></td></tr>"#,
            name = escape(&e.name),
            dept = escape(&e.department),
            salary = format_salary(e.basic_salary),
            id = e.id,
        );
    }
    body.push_str("</tbody>\n</table>\n");
    layout("Payroll", &body)
}

fn employee_form(action: &str, submit: &str, name: &str, department: &str, salary: &str) -> String {
    format!(
        r#"<form method="post" action="{action}">
<label>Name <input type="text" name="name" value="{name}" required></label>
<label>Department <input type="text" name="department" value="{department}" placeholder="General"></label>
<label>Basic salary <input type="number" name="basicSalary" value="{salary}" min="0" step="0.01" required></label>
<button type="submit">{submit}</button>
<a href="/">Cancel</a>
</form>
"#,
        action = escape(action),
        name = escape(name),
        department = escape(department),
        salary = escape(salary),
        submit = escape(submit),
    )
}

fn salary_text(value: Option<&SalaryValue>) -> String {
    match value {
        Some(SalaryValue::Number(n)) => n.to_string(),
        Some(SalaryValue::Text(s)) => s.clone(),
        Some(SalaryValue::Other(v)) => v.to_string(),
        None => String::new(),
    }
}

/// Add form, optionally re-displaying the submitted values and a validation message.
pub fn add_form(input: &EmployeeInput, error: Option<&str>) -> String {
    let body = format!(
        "<h1>Add employee</h1>\n{}{}",
        error_banner(error),
        employee_form(
            "/add",
            "Add",
            input.name.as_deref().unwrap_or_default(),
            input.department.as_deref().unwrap_or_default(),
            &salary_text(input.basic_salary.as_ref()),
        ),
    );
    layout("Add employee", &body)
}

/// Edit form prefilled from the stored record.
pub fn edit_form(employee: &Employee, error: Option<&str>) -> String {
    let body = format!(
        "<h1>Edit employee</h1>\n{}{}",
        error_banner(error),
        employee_form(
            &format!("/edit/{}", employee.id),
            "Save",
            &employee.name,
            &employee.department,
            &employee.basic_salary.to_string(),
        ),
    );
    layout("Edit employee", &body)
}

pub fn error_page(message: &str) -> String {
    let body = format!("<h1>Error</h1>\n{}<p><a href=\"/\">Back to list</a></p>\n", error_banner(Some(message)));
    layout("Error", &body)
}
