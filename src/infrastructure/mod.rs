use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{booking::Booking, employee::Employee, errors::DomainError, order::Order};

pub mod in_memory;

/// Identity hook the generic store needs from every persisted record type.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> Option<u64>;

    fn assign_id(&mut self, id: u64);

    /// The identity of an already-persisted record. `None` here means a
    /// record escaped the store without an id, which is a bug, so it maps
    /// to an internal error rather than a default.
    fn require_id(&self) -> Result<u64, DomainError> {
        self.id()
            .ok_or_else(|| DomainError::internal("record has no assigned identity"))
    }
}

/// Per-entity-type storage interface: find-all, find-by-id,
/// insert-or-update save, delete-by-id.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    async fn find_all(&self) -> Result<Vec<E>, DomainError>;

    async fn find_by_id(&self, id: u64) -> Result<Option<E>, DomainError>;

    /// Inserts when the entity carries no identity (assigning the next one),
    /// otherwise writes at the carried identity, inserting or overwriting.
    /// Returns the persisted entity with its identity populated.
    async fn save(&self, entity: E) -> Result<E, DomainError>;

    /// Silent success whether or not the id existed.
    async fn delete_by_id(&self, id: u64) -> Result<(), DomainError>;
}

pub type DynRepository<E> = Arc<dyn Repository<E>>;

impl Entity for Employee {
    fn id(&self) -> Option<u64> {
        self.id
    }

    fn assign_id(&mut self, id: u64) {
        self.id = Some(id);
    }
}

impl Entity for Order {
    fn id(&self) -> Option<u64> {
        self.id
    }

    fn assign_id(&mut self, id: u64) {
        self.id = Some(id);
    }
}

impl Entity for Booking {
    fn id(&self) -> Option<u64> {
        self.id
    }

    fn assign_id(&mut self, id: u64) {
        self.id = Some(id);
    }
}
