use crate::{
    domain::{booking::Booking, errors::DomainError},
    infrastructure::DynRepository,
};

pub struct BookingService {
    repository: DynRepository<Booking>,
}

impl BookingService {
    pub fn new(repository: DynRepository<Booking>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<Booking>, DomainError> {
        self.repository.find_all().await
    }
}
