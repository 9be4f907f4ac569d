//! Id - Typed, opaque identifier for stored resources.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque identifier for a resource of type `R`.
///
/// The phantom parameter ties an `Id` to the resource type it was issued for,
/// so an `Id<Order>` cannot be passed to a repository of `Note`s. Ids compare
/// by value and are orderable, which the identifier generator relies on.
pub struct Id<R> {
    value: u64,
    _marker: PhantomData<fn() -> R>,
}

impl<R> Id<R> {
    /// Wrap a raw identifier value.
    pub fn new(value: u64) -> Self {
        Id {
            value,
            _marker: PhantomData,
        }
    }

    /// The raw identifier value.
    pub fn value(&self) -> u64 {
        self.value
    }
}

// Manual impls: deriving would put unwanted bounds on `R`.

impl<R> Clone for Id<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Id<R> {}

impl<R> PartialEq for Id<R> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R> Eq for Id<R> {}

impl<R> Hash for Id<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<R> PartialOrd for Id<R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R> Ord for Id<R> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<R> fmt::Debug for Id<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Id").field(&self.value).finish()
    }
}

impl<R> fmt::Display for Id<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<R> Serialize for Id<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.value)
    }
}

impl<'de, R> Deserialize<'de> for Id<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u64::deserialize(deserializer).map(Id::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Widget;

    #[test]
    fn compares_by_value() {
        assert_eq!(Id::<Widget>::new(1), Id::<Widget>::new(1));
        assert!(Id::<Widget>::new(1) < Id::<Widget>::new(2));
    }

    #[test]
    fn serializes_as_plain_number() {
        let id = Id::<Widget>::new(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");

        let back: Id<Widget> = serde_json::from_str("42").unwrap();
        assert_eq!(back, id);
    }
}
