//! Animal record store and query engine.
//!
//! The collection is loaded once from durable storage, served from memory,
//! and rewritten in full on every append. On top of it sit two pure query
//! operations:
//!
//! - [`filter_by_query`]: AND-combined exact-match filtering on
//!   `personalityTraits`, `diet`, `species` and `name`.
//! - [`find_by_id`]: first record with a given id.
//!
//! [`validate_animal`] decides whether a caller-supplied body may be stored,
//! and [`AnimalStore::append`] assigns the next sequential id and persists.
//!
//! ```no_run
//! use std::sync::Arc;
//! use zookeepr::{AnimalStore, Criteria, JsonFileStorage, NewAnimal};
//!
//! let store = AnimalStore::open(Arc::new(JsonFileStorage::new("data/animals.json")))?;
//! let carnivores = store.filter(&Criteria::new().with_diet("carnivore"))?;
//! let owl = store.append(NewAnimal::new("Owl", "owl", "carnivore", vec!["wise".into()]))?;
//! println!("{} carnivores, new id {}", carnivores.len(), owl.id);
//! # Ok::<(), zookeepr::StoreError>(())
//! ```

pub mod animal;
pub mod error;
pub mod query;
pub mod storage;
pub mod store;
pub mod validate;

pub use animal::{Animal, NewAnimal};
pub use error::StoreError;
pub use query::{Criteria, filter_by_query, find_by_id};
pub use storage::{JsonFileStorage, MemoryStorage, Storage, encode_document};
pub use store::AnimalStore;
pub use validate::validate_animal;
