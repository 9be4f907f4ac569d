//! Metadata - Transient per-id bookkeeping held outside the primary mapping.

/// Per-id record tracking whether the id was freshly assigned by the store.
///
/// An entry exists only between id assignment and the next successful write to
/// that id; the write removes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    freshly_assigned: bool,
}

impl Metadata {
    /// Metadata for an id the store just assigned.
    pub fn fresh() -> Self {
        Metadata {
            freshly_assigned: true,
        }
    }

    /// Whether the id this entry belongs to was assigned by the store and has
    /// not yet been confirmed by a write.
    pub fn is_freshly_assigned(&self) -> bool {
        self.freshly_assigned
    }
}
