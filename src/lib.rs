mod error;
mod id;
mod id_map;
mod metadata;
mod repository;
mod resource;

pub use error::RepositoryError;
pub use id::Id;
pub use id_map::{IdMap, InMemoryIdMap};
pub use metadata::Metadata;
pub use repository::{InMemoryRepository, Repository};
pub use resource::Resource;
