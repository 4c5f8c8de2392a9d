use std::fmt;

use crate::domain::errors::DomainError;

/// An employee record. The identity is assigned by the store on first save
/// and never changes afterwards; equality is structural over all fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: Option<u64>,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

/// Field set for creating an employee or overwriting one in place.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

impl Employee {
    pub fn new(fields: NewEmployee) -> Self {
        Self {
            id: None,
            first_name: fields.first_name,
            last_name: fields.last_name,
            role: fields.role,
        }
    }

    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Overwrites the name fields and role, leaving the identity untouched.
    pub fn update_from(&mut self, fields: NewEmployee) {
        self.first_name = fields.first_name;
        self.last_name = fields.last_name;
        self.role = fields.role;
    }
}

/// Splits a display name into its two components. Exactly two
/// whitespace-separated tokens are required; anything else is rejected
/// instead of being silently truncated or panicking on a missing part.
pub fn split_full_name(name: &str) -> Result<(String, String), DomainError> {
    let mut tokens = name.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(first), Some(last), None) => Ok((first.to_string(), last.to_string())),
        _ => Err(DomainError::validation(
            "name must be exactly two space-separated parts",
        )),
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee{{id={}, firstName='{}', lastName='{}', role='{}'}}",
            self.id.map_or_else(|| "-".to_string(), |id| id.to_string()),
            self.first_name,
            self.last_name,
            self.role
        )
    }
}
