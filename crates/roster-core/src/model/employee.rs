//! Employee record as mirrored from the upstream provider, and the
//! caller-supplied creation payload.

use serde::{Deserialize, Serialize};

/// One employee as the upstream provider reports it.
///
/// Only `id` is guaranteed. Every other attribute may be absent in an
/// upstream payload and is carried as `None` rather than rejected; the
/// aggregation queries define how absence is treated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub employee_salary: Option<u64>,
    #[serde(default)]
    pub employee_age: Option<u32>,
    #[serde(default)]
    pub employee_title: Option<String>,
    #[serde(default)]
    pub employee_email: Option<String>,
}

impl EmployeeRecord {
    /// A record with only its identifier set
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            employee_name: None,
            employee_salary: None,
            employee_age: None,
            employee_title: None,
            employee_email: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.employee_name = Some(name.into());
        self
    }

    pub fn with_salary(mut self, salary: u64) -> Self {
        self.employee_salary = Some(salary);
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.employee_age = Some(age);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.employee_title = Some(title.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.employee_email = Some(email.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.employee_name.as_deref()
    }

    /// True when every field of `request` is reflected in this record.
    /// The identifier and e-mail are upstream-assigned and not compared.
    pub fn matches_request(&self, request: &EmployeeCreateRequest) -> bool {
        self.employee_name.as_deref() == Some(request.name.as_str())
            && self.employee_salary == Some(request.salary)
            && self.employee_age == Some(request.age)
            && self.employee_title.as_deref() == Some(request.title.as_str())
    }
}

/// Caller-supplied payload for creating an employee.
///
/// All four fields are mandatory; deserialization fails when one is missing.
/// Values are otherwise forwarded untouched; the upstream validates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCreateRequest {
    pub name: String,
    pub salary: u64,
    pub age: u32,
    pub title: String,
}

impl EmployeeCreateRequest {
    pub fn new(name: impl Into<String>, salary: u64, age: u32, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            salary,
            age,
            title: title.into(),
        }
    }
}
