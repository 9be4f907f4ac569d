//! IdMap - Identifier-generating ordered storage for resources.
//!
//! The id map is the repository's storage collaborator: an ordered mapping from
//! id to resource that also owns id generation. Mutating operations take
//! `&mut self`; callers that need concurrent access wrap the map in their own
//! mutual-exclusion scope (the in-memory repository puts the map and its
//! freshness metadata under one lock).

mod in_memory;

use crate::error::RepositoryError;
use crate::id::Id;
use crate::resource::Resource;

/// Ordered id-to-resource storage with id generation.
pub trait IdMap<R: Resource> {
    /// Get the resource stored under `id`. Returns None if not found.
    fn get(&self, id: Id<R>) -> Result<Option<R>, RepositoryError>;

    /// Store `resource` under `id`, overwriting any prior value, and return
    /// the stored resource. Advances the id generator past `id` so generated
    /// ids never collide with client-supplied ones.
    fn put(&mut self, id: Id<R>, resource: &R) -> Result<R, RepositoryError>;

    /// Remove the resource under `id`. Returns true if it existed.
    fn delete(&mut self, id: Id<R>) -> Result<bool, RepositoryError>;

    /// Whether a resource is stored under `id`.
    fn exists(&self, id: Id<R>) -> Result<bool, RepositoryError>;

    /// The id the generator would produce next. Does not reserve it.
    fn next_id(&self) -> Id<R>;

    /// Take the next id from the generator, reserving it.
    fn reserve_id(&mut self) -> Id<R>;
}

pub use in_memory::InMemoryIdMap;
