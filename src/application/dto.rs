use serde::{Deserialize, Serialize};

use crate::domain::{
    booking::Booking,
    employee::{Employee, NewEmployee, split_full_name},
    errors::DomainError,
    order::{Order, Status},
};

/// Payload for `POST /employees` and `PUT /employees/{id}`. The name can be
/// supplied either as the explicit `firstName`/`lastName` pair or as a
/// composite `name` that must split into exactly two parts. A caller-supplied
/// `id` is accepted and ignored; the store or the path owns identity.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub role: String,
}

impl EmployeeRequest {
    pub fn into_fields(self) -> Result<NewEmployee, DomainError> {
        let role = self.role.trim();
        if role.is_empty() {
            return Err(DomainError::validation("role must not be blank"));
        }

        let (first_name, last_name) = match (self.name, self.first_name, self.last_name) {
            (Some(name), None, None) => split_full_name(&name)?,
            (None, Some(first), Some(last)) => {
                let first = first.trim();
                let last = last.trim();
                if first.is_empty() || last.is_empty() {
                    return Err(DomainError::validation(
                        "firstName and lastName must not be blank",
                    ));
                }
                (first.to_string(), last.to_string())
            }
            _ => {
                return Err(DomainError::validation(
                    "provide either name or both firstName and lastName",
                ));
            }
        };

        Ok(NewEmployee {
            first_name,
            last_name,
            role: role.to_string(),
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub name: String,
    pub role: String,
}

impl EmployeeResponse {
    pub fn new(id: u64, employee: Employee) -> Self {
        Self {
            id,
            name: employee.name(),
            first_name: employee.first_name,
            last_name: employee.last_name,
            role: employee.role,
        }
    }
}

/// Payload for `POST /orders`. Any supplied status is ignored: new orders
/// always start in `IN_PROGRESS`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub description: String,
    #[serde(default)]
    pub status: Option<Status>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: u64,
    pub description: String,
    pub status: Status,
}

impl OrderResponse {
    pub fn new(id: u64, order: Order) -> Self {
        Self {
            id,
            description: order.description,
            status: order.status,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: u64,
    pub booking_name: String,
}

impl BookingResponse {
    pub fn new(id: u64, booking: Booking) -> Self {
        Self {
            id,
            booking_name: booking.booking_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
