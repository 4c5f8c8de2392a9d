use std::fmt;

/// Demo scaffold: stored and listed, no write path over HTTP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: Option<u64>,
    pub booking_name: String,
}

impl Booking {
    pub fn new(booking_name: impl Into<String>) -> Self {
        Self {
            id: None,
            booking_name: booking_name.into(),
        }
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Booking{{id={}, bookingName='{}'}}",
            self.id.map_or_else(|| "-".to_string(), |id| id.to_string()),
            self.booking_name
        )
    }
}
