use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    domain::errors::DomainError,
    infrastructure::{Entity, Repository},
};

/// In-memory store keyed by a store-assigned sequential identity.
/// A `BTreeMap` keeps listings in id order, matching what an embedded
/// relational store would return for an unqualified scan.
pub struct InMemoryRepository<E> {
    records: RwLock<BTreeMap<u64, E>>,
    next_id: AtomicU64,
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn find_all(&self) -> Result<Vec<E>, DomainError> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<E>, DomainError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn save(&self, mut entity: E) -> Result<E, DomainError> {
        let mut records = self.records.write().await;

        let id = match entity.id() {
            Some(id) => {
                // Keep the sequence ahead of explicitly assigned ids so a
                // later plain insert never collides with an upserted record.
                self.next_id.fetch_max(id + 1, Ordering::SeqCst);
                id
            }
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                entity.assign_id(id);
                id
            }
        };

        records.insert(id, entity.clone());
        Ok(entity)
    }

    async fn delete_by_id(&self, id: u64) -> Result<(), DomainError> {
        self.records.write().await.remove(&id);
        Ok(())
    }
}
