use std::fmt;

/// Error type for repository operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// `put` was asked to update an id that is neither freshly assigned nor
    /// stored. This is a caller logic error, not a recoverable condition.
    MissingResource { id: u64 },
    /// Resource (de)serialization failed.
    Serde(String),
    /// A storage lock was poisoned by a panicking writer.
    LockPoisoned(&'static str),
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::MissingResource { id } => {
                write!(f, "cannot update resource {}: no resource stored under that id", id)
            }
            RepositoryError::Serde(msg) => write!(f, "resource serialization error: {}", msg),
            RepositoryError::LockPoisoned(operation) => {
                write!(f, "repository lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}
