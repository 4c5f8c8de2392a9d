use std::fmt;

use serde::{Deserialize, Serialize};

/// Order lifecycle. `InProgress` is the only state with outgoing
/// transitions; `Completed` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    InProgress,
    Completed,
    Cancelled,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: Option<u64>,
    pub description: String,
    pub status: Status,
}

impl Order {
    /// New orders always start in `IN_PROGRESS`, whatever the caller asked for.
    pub fn new(description: impl Into<String>) -> Self {
        Self::with_status(description, Status::InProgress)
    }

    /// Seed-only constructor that bypasses the creation guard.
    pub fn with_status(description: impl Into<String>, status: Status) -> Self {
        Self {
            id: None,
            description: description.into(),
            status,
        }
    }

    /// Moves the order to `CANCELLED`. A rejected transition is reported as
    /// data (the current terminal status), not as an error.
    pub fn cancel(&mut self) -> Result<(), Status> {
        self.transition_to(Status::Cancelled)
    }

    /// Moves the order to `COMPLETED`, under the same guard as `cancel`.
    pub fn complete(&mut self) -> Result<(), Status> {
        self.transition_to(Status::Completed)
    }

    fn transition_to(&mut self, target: Status) -> Result<(), Status> {
        if self.status == Status::InProgress {
            self.status = target;
            Ok(())
        } else {
            Err(self.status)
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order{{id={}, description='{}', status={}}}",
            self.id.map_or_else(|| "-".to_string(), |id| id.to_string()),
            self.description,
            self.status
        )
    }
}
