//! InMemoryIdMap - BTreeMap-backed id map for testing and development.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use super::IdMap;
use crate::error::RepositoryError;
use crate::id::Id;
use crate::resource::Resource;

/// In-memory id map backed by a BTreeMap of serialized resources.
///
/// Resources are held as JSON bytes, so `get` hands back an independent copy
/// of what was stored. Ids are issued by a monotonic counter starting at 1.
pub struct InMemoryIdMap<R> {
    storage: BTreeMap<u64, Vec<u8>>,
    next_id: u64,
    _marker: PhantomData<fn() -> R>,
}

impl<R> Default for InMemoryIdMap<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> InMemoryIdMap<R> {
    /// Create a new empty id map.
    pub fn new() -> Self {
        InMemoryIdMap {
            storage: BTreeMap::new(),
            next_id: 1,
            _marker: PhantomData,
        }
    }

    /// Number of stored resources.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether the map holds no resources.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl<R: Resource> IdMap<R> for InMemoryIdMap<R> {
    fn get(&self, id: Id<R>) -> Result<Option<R>, RepositoryError> {
        match self.storage.get(&id.value()) {
            Some(bytes) => {
                let resource: R = serde_json::from_slice(bytes)
                    .map_err(|e| RepositoryError::Serde(e.to_string()))?;
                Ok(Some(resource))
            }
            None => Ok(None),
        }
    }

    fn put(&mut self, id: Id<R>, resource: &R) -> Result<R, RepositoryError> {
        let bytes =
            serde_json::to_vec(resource).map_err(|e| RepositoryError::Serde(e.to_string()))?;
        self.storage.insert(id.value(), bytes);

        // Keep generated ids ahead of any client-supplied id.
        if id.value() >= self.next_id {
            self.next_id = id.value() + 1;
        }

        Ok(resource.clone())
    }

    fn delete(&mut self, id: Id<R>) -> Result<bool, RepositoryError> {
        Ok(self.storage.remove(&id.value()).is_some())
    }

    fn exists(&self, id: Id<R>) -> Result<bool, RepositoryError> {
        Ok(self.storage.contains_key(&id.value()))
    }

    fn next_id(&self) -> Id<R> {
        Id::new(self.next_id)
    }

    fn reserve_id(&mut self) -> Id<R> {
        let id = Id::new(self.next_id);
        self.next_id += 1;
        id
    }
}
