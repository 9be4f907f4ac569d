//! InMemoryRepository - Lock-guarded repository over an id map.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::Repository;
use crate::error::RepositoryError;
use crate::id::Id;
use crate::id_map::{IdMap, InMemoryIdMap};
use crate::metadata::Metadata;
use crate::resource::Resource;

struct Inner<R: Resource, M> {
    resources: M,
    metadata: HashMap<Id<R>, Metadata>,
}

/// In-memory repository keeping the id map and freshness metadata under a
/// single lock, so the check-then-act sequences in `put` and `assign_id` are
/// atomic. Clone-friendly via Arc.
pub struct InMemoryRepository<R: Resource, M: IdMap<R> = InMemoryIdMap<R>> {
    inner: Arc<RwLock<Inner<R, M>>>,
}

impl<R: Resource, M: IdMap<R>> Clone for InMemoryRepository<R, M> {
    fn clone(&self) -> Self {
        InMemoryRepository {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Resource> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> InMemoryRepository<R> {
    /// Create a new empty repository over the default in-memory id map.
    pub fn new() -> Self {
        Self::with_id_map(InMemoryIdMap::new())
    }
}

impl<R: Resource, M: IdMap<R>> InMemoryRepository<R, M> {
    /// Create a repository over a caller-supplied id map.
    pub fn with_id_map(resources: M) -> Self {
        InMemoryRepository {
            inner: Arc::new(RwLock::new(Inner {
                resources,
                metadata: HashMap::new(),
            })),
        }
    }
}

impl<R: Resource, M: IdMap<R>> Repository<R> for InMemoryRepository<R, M> {
    fn get(&self, id: Id<R>) -> Result<Option<R>, RepositoryError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("get"))?;
        inner.resources.get(id)
    }

    fn put(&self, mut resource: R) -> Result<R, RepositoryError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("put"))?;

        let id = match resource.id() {
            None => {
                // insert semantics
                let id = inner.resources.reserve_id();
                resource.set_id(id);
                id
            }
            Some(id) => {
                let fresh = inner
                    .metadata
                    .get(&id)
                    .map(Metadata::is_freshly_assigned)
                    .unwrap_or(false);
                if !fresh {
                    // update semantics
                    if !inner.resources.exists(id)? {
                        return Err(RepositoryError::MissingResource { id: id.value() });
                    }
                }
                id
            }
        };

        let stored = inner.resources.put(id, &resource)?;
        inner.metadata.remove(&id);
        Ok(stored)
    }

    fn delete(&self, id: Id<R>) -> Result<bool, RepositoryError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("delete"))?;
        inner.resources.delete(id)
    }

    fn exists(&self, id: Id<R>) -> Result<bool, RepositoryError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("exists"))?;
        inner.resources.exists(id)
    }

    fn next_id(&self) -> Result<Id<R>, RepositoryError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("next_id"))?;
        Ok(inner.resources.next_id())
    }

    fn assign_id(&self, resource: &mut R) -> Result<Id<R>, RepositoryError> {
        if let Some(id) = resource.id() {
            return Ok(id);
        }

        let mut inner = self
            .inner
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("assign_id"))?;
        let id = inner.resources.reserve_id();
        resource.set_id(id);
        inner.metadata.insert(id, Metadata::fresh());
        Ok(id)
    }

    fn is_freshly_assigned(&self, id: Id<R>) -> Result<bool, RepositoryError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("is_freshly_assigned"))?;
        Ok(inner
            .metadata
            .get(&id)
            .map(Metadata::is_freshly_assigned)
            .unwrap_or(false))
    }
}
