//! Repository trait - The CRUD surface over a resource store.

use crate::error::RepositoryError;
use crate::id::Id;
use crate::resource::Resource;

/// Keyed CRUD storage for resources of type `R`.
pub trait Repository<R: Resource> {
    /// Get the resource stored under `id`. Returns None if not found.
    fn get(&self, id: Id<R>) -> Result<Option<R>, RepositoryError>;

    /// Store a resource and return the stored copy.
    ///
    /// A resource without an id is inserted: the store assigns a new id and
    /// sets it on the returned copy. A resource with an id is an update and
    /// must already exist, unless the id was freshly assigned via
    /// [`assign_id`](Repository::assign_id) and not yet written, in which case
    /// the existence check is skipped. Either way the write overwrites any
    /// prior value and clears the freshness metadata for that id.
    ///
    /// Fails with [`RepositoryError::MissingResource`] when asked to update an
    /// id that is neither freshly assigned nor stored.
    fn put(&self, resource: R) -> Result<R, RepositoryError>;

    /// Remove the resource under `id`. Returns true if it existed; deleting a
    /// missing id is a no-op, not an error.
    fn delete(&self, id: Id<R>) -> Result<bool, RepositoryError>;

    /// Whether a resource is stored under `id`.
    fn exists(&self, id: Id<R>) -> Result<bool, RepositoryError>;

    /// The id the generator would produce next. Does not reserve it; only
    /// [`assign_id`](Repository::assign_id) and the insert path of
    /// [`put`](Repository::put) consume ids.
    fn next_id(&self) -> Result<Id<R>, RepositoryError>;

    /// Assign a new id to `resource` if it has none, recording that the id is
    /// freshly assigned, and return it. A resource that already has an id is
    /// returned unchanged with no side effect.
    fn assign_id(&self, resource: &mut R) -> Result<Id<R>, RepositoryError>;

    /// Whether `id` was assigned by this store and not yet confirmed by a
    /// subsequent write. False when no metadata entry exists for `id`.
    fn is_freshly_assigned(&self, id: Id<R>) -> Result<bool, RepositoryError>;
}
