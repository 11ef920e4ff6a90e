use std::sync::Arc;

use rand::Rng;
use tokio::sync::RwLock;
use tracing::debug;

use super::entity::Entity;
use crate::seed::Dummy;

/// Insertion-ordered in-memory collection of one entity kind.
///
/// Every query is a linear scan. Ids come from a counter that starts at 1 and
/// never goes backwards, so a deleted id is never handed out again.
#[derive(Debug, Clone)]
pub struct EntityStore<T> {
    records: Vec<T>,
    next_id: u64,
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        Self { records: Vec::new(), next_id: 1 }
    }

    /// Assign the next id, append the record and return a copy of it.
    pub fn create(&mut self, fields: T::Fields) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let record = T::build(id, fields);
        self.records.push(record.clone());
        record
    }

    /// First record, oldest first, that matches every criterion exactly.
    pub fn get(&self, criteria: &[T::Criterion]) -> Option<&T> {
        self.records
            .iter()
            .find(|r| criteria.iter().all(|c| r.matches_exact(c)))
    }

    pub fn get_by_id(&self, id: u64) -> Option<&T> {
        self.get(&[T::id_criterion(id)])
    }

    /// Every record matching all criteria, where sequence fields match by
    /// membership. Empty when nothing matches.
    pub fn filter(&self, criteria: &[T::Criterion]) -> Vec<T> {
        self.records
            .iter()
            .filter(|r| criteria.iter().all(|c| r.matches(c)))
            .cloned()
            .collect()
    }

    /// Apply `patch` to the live record sharing `record`'s id.
    /// Returns the updated copy, or `None` when the record is gone.
    pub fn update(&mut self, record: &T, patch: T::Patch) -> Option<T> {
        let id = record.id();
        let slot = self.records.iter_mut().find(|r| r.id() == id)?;
        slot.apply(patch);
        Some(slot.clone())
    }

    /// Remove the record sharing `record`'s id; returns whether it was live.
    pub fn delete(&mut self, record: &T) -> bool {
        let id = record.id();
        match self.records.iter().position(|r| r.id() == id) {
            Some(idx) => {
                self.records.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append `count` synthetic records for manual exploration.
    pub fn seed_dummy_data<R>(&mut self, count: usize, rng: &mut R) -> usize
    where
        T::Fields: Dummy,
        R: Rng + ?Sized,
    {
        for i in 1..=count {
            let record = self.create(<T::Fields as Dummy>::dummy(i, rng));
            debug!(kind = T::KIND, id = record.id(), "seeded dummy record");
        }
        count
    }
}

/// Shared, lock-guarded handle on an [`EntityStore`].
///
/// Each call holds the lock for the whole operation; `update_store` lets a
/// caller run a lookup and a mutation under one write guard.
pub struct SharedStore<T> {
    inner: Arc<RwLock<EntityStore<T>>>,
}

impl<T> Clone for SharedStore<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T: Entity> Default for SharedStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> SharedStore<T> {
    pub fn new() -> Self {
        Self::from_store(EntityStore::new())
    }

    pub fn from_store(store: EntityStore<T>) -> Self {
        Self { inner: Arc::new(RwLock::new(store)) }
    }

    pub async fn create(&self, fields: T::Fields) -> T {
        self.inner.write().await.create(fields)
    }

    pub async fn filter(&self, criteria: &[T::Criterion]) -> Vec<T> {
        self.inner.read().await.filter(criteria)
    }

    pub async fn all(&self) -> Vec<T> {
        self.inner.read().await.all().to_vec()
    }

    /// Run a read-only closure against the store.
    pub async fn read_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&EntityStore<T>) -> R,
    {
        let store = self.inner.read().await;
        f(&store)
    }

    /// Apply a mutation to the underlying store under a single write guard.
    pub async fn update_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut EntityStore<T>) -> R,
    {
        let mut store = self.inner.write().await;
        f(&mut store)
    }
}
