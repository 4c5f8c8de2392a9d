use crate::{
    domain::{
        errors::DomainError,
        order::{Order, Status},
    },
    infrastructure::DynRepository,
};

/// What happened to a cancel/complete request. A rejected transition is a
/// business outcome, not an error: nothing was mutated and the current
/// terminal status is reported back for the problem detail.
#[derive(Debug)]
pub enum TransitionOutcome {
    Applied(Order),
    Rejected(Status),
}

pub struct OrderService {
    repository: DynRepository<Order>,
}

impl OrderService {
    pub fn new(repository: DynRepository<Order>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<Order>, DomainError> {
        self.repository.find_all().await
    }

    pub async fn get(&self, id: u64) -> Result<Order, DomainError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Could not find order {id}")))
    }

    /// Persists a new order in `IN_PROGRESS`, whatever status the caller sent.
    pub async fn create(&self, description: String) -> Result<Order, DomainError> {
        self.repository.save(Order::new(description)).await
    }

    pub async fn cancel(&self, id: u64) -> Result<TransitionOutcome, DomainError> {
        let mut order = self.get(id).await?;
        match order.cancel() {
            Ok(()) => Ok(TransitionOutcome::Applied(self.repository.save(order).await?)),
            Err(current) => Ok(TransitionOutcome::Rejected(current)),
        }
    }

    pub async fn complete(&self, id: u64) -> Result<TransitionOutcome, DomainError> {
        let mut order = self.get(id).await?;
        match order.complete() {
            Ok(()) => Ok(TransitionOutcome::Applied(self.repository.save(order).await?)),
            Err(current) => Ok(TransitionOutcome::Rejected(current)),
        }
    }
}
