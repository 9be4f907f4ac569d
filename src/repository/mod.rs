//! Repository - Keyed CRUD storage for resources with assignable ids.
//!
//! A repository stores resources under opaque ids and distinguishes insert
//! from update on `put`: a resource without an id is inserted under a newly
//! assigned id, while a resource carrying an id must either already exist or
//! hold an id the store itself just assigned (see [`Repository::assign_id`]).
//!
//! ## Example
//!
//! ```ignore
//! use resource_store::{Id, InMemoryRepository, Repository, Resource};
//!
//! let repo = InMemoryRepository::new();
//! let note = repo.put(Note { id: None, body: "hello".into() })?;
//! let id = note.id().unwrap();
//! assert!(repo.exists(id)?);
//! ```

mod in_memory;
mod repository;

pub use in_memory::InMemoryRepository;
pub use repository::Repository;
