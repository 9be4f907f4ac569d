//! Resource - Trait for entities stored by the repository.

use serde::{de::DeserializeOwned, Serialize};

use crate::id::Id;

/// Trait for types that can be stored in a resource repository.
///
/// A resource's id is optional: a resource fresh from a client has no id until
/// the store assigns one, and that absent state is type-checked rather than
/// signalled by a sentinel value.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The id of this resource, if one has been assigned.
    fn id(&self) -> Option<Id<Self>>;

    /// Set the id of this resource. Called by the store when it assigns one.
    fn set_id(&mut self, id: Id<Self>);

    /// Whether this resource has an id.
    fn has_id(&self) -> bool {
        self.id().is_some()
    }
}
