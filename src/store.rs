use std::sync::{Arc, RwLock};

use crate::animal::{Animal, NewAnimal};
use crate::error::StoreError;
use crate::query::{self, Criteria};
use crate::storage::Storage;

/// The in-memory animal collection and the storage it persists to.
///
/// Reads share the lock. [`append`](Self::append) holds it exclusively
/// across id assignment, push and save, so concurrent appends never see the
/// same length and never interleave document writes.
pub struct AnimalStore {
    animals: RwLock<Vec<Animal>>,
    storage: Arc<dyn Storage>,
}

impl std::fmt::Debug for AnimalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimalStore")
            .field("len", &self.len().unwrap_or_default())
            .finish_non_exhaustive()
    }
}

impl AnimalStore {
    /// Load the collection once from `storage`.
    pub fn open(storage: Arc<dyn Storage>) -> Result<Self, StoreError> {
        let animals = storage.load()?;
        tracing::info!(count = animals.len(), "animal store opened");
        Ok(Self {
            animals: RwLock::new(animals),
            storage,
        })
    }

    /// Snapshot of the full collection in insertion order.
    pub fn all(&self) -> Result<Vec<Animal>, StoreError> {
        let animals = self.animals.read().map_err(|_| StoreError::Poisoned)?;
        Ok(animals.clone())
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        let animals = self.animals.read().map_err(|_| StoreError::Poisoned)?;
        Ok(animals.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    pub fn filter(&self, criteria: &Criteria) -> Result<Vec<Animal>, StoreError> {
        let animals = self.animals.read().map_err(|_| StoreError::Poisoned)?;
        Ok(query::filter_by_query(criteria, &animals))
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<Animal>, StoreError> {
        let animals = self.animals.read().map_err(|_| StoreError::Poisoned)?;
        Ok(query::find_by_id(id, &animals).cloned())
    }

    /// Assign the next id, push the record, and rewrite storage.
    ///
    /// The id is the collection length before insertion. If the save fails
    /// the error is returned but the record stays in memory; storage catches
    /// up on the next successful append, or the record is lost on restart.
    pub fn append(&self, candidate: NewAnimal) -> Result<Animal, StoreError> {
        let mut animals = self.animals.write().map_err(|_| StoreError::Poisoned)?;

        let animal = candidate.with_id(animals.len().to_string());
        animals.push(animal.clone());

        if let Err(err) = self.storage.save(&animals) {
            tracing::error!(
                id = %animal.id,
                error = %err,
                "animal kept in memory but not persisted"
            );
            return Err(err);
        }

        tracing::info!(id = %animal.id, name = %animal.name, "animal created");
        Ok(animal)
    }
}
