mod support;

use std::collections::HashMap;

use resource_store::{
    Id, IdMap, InMemoryIdMap, InMemoryRepository, Repository, RepositoryError, Resource,
};
use support::order::Order;

#[test]
fn create_and_fetch() {
    let repo = InMemoryRepository::new();

    let order = repo.put(Order::new("user1", 2500)).unwrap();
    let id = order.id.expect("store assigns an id on insert");

    let fetched = repo.get(id).unwrap().expect("order is retrievable");
    assert_eq!(fetched.customer, "user1");
    assert_eq!(fetched.total_cents, 2500);
    assert!(repo.exists(id).unwrap());
}

#[test]
fn update_requires_an_existing_order() {
    let repo = InMemoryRepository::new();

    let mut ghost = Order::new("nobody", 0);
    ghost.id = Some(Id::new(7));
    assert_eq!(
        repo.put(ghost).unwrap_err(),
        RepositoryError::MissingResource { id: 7 }
    );

    // After a real insert the same id updates cleanly.
    let stored = repo.put(Order::new("user1", 100)).unwrap();
    let id = stored.id.unwrap();
    let mut revised = stored;
    revised.total_cents = 150;
    repo.put(revised).unwrap();

    assert_eq!(repo.get(id).unwrap().unwrap().total_cents, 150);
}

#[test]
fn two_phase_create_with_assigned_id() {
    let repo = InMemoryRepository::new();

    // Phase one: reserve an id for the order before it is written, e.g. to
    // hand the id back to a client while the order is still being filled in.
    let mut draft = Order::new("user2", 0);
    let id = repo.assign_id(&mut draft).unwrap();
    assert!(repo.is_freshly_assigned(id).unwrap());
    assert!(!repo.exists(id).unwrap());

    // Phase two: the write lands under the reserved id without an existence
    // check, and the id stops being fresh.
    draft.total_cents = 4200;
    repo.put(draft).unwrap();
    assert!(!repo.is_freshly_assigned(id).unwrap());
    assert_eq!(repo.get(id).unwrap().unwrap().total_cents, 4200);
}

#[test]
fn deleted_orders_are_gone() {
    let repo = InMemoryRepository::new();
    let id = repo.put(Order::new("user3", 900)).unwrap().id.unwrap();

    assert!(repo.delete(id).unwrap());
    assert!(!repo.exists(id).unwrap());
    assert!(repo.get(id).unwrap().is_none());

    // Deleting again is a no-op.
    assert!(!repo.delete(id).unwrap());
}

#[test]
fn pre_seeded_id_map_keeps_generated_ids_ahead() {
    let mut map = InMemoryIdMap::new();
    let mut imported = Order::new("legacy", 777);
    imported.id = Some(Id::new(40));
    map.put(Id::new(40), &imported).unwrap();

    let repo = InMemoryRepository::with_id_map(map);
    assert_eq!(repo.get(Id::new(40)).unwrap().unwrap().customer, "legacy");

    let fresh = repo.put(Order::new("user4", 10)).unwrap();
    assert_eq!(fresh.id, Some(Id::new(41)));
}

/// Clone-backed id map issuing ids from 1000, standing in for a storage
/// backend with its own sequence.
struct SequencedMap<R> {
    storage: HashMap<u64, R>,
    next_id: u64,
}

impl<R> SequencedMap<R> {
    fn new(first_id: u64) -> Self {
        SequencedMap {
            storage: HashMap::new(),
            next_id: first_id,
        }
    }
}

impl<R: Resource> IdMap<R> for SequencedMap<R> {
    fn get(&self, id: Id<R>) -> Result<Option<R>, RepositoryError> {
        Ok(self.storage.get(&id.value()).cloned())
    }

    fn put(&mut self, id: Id<R>, resource: &R) -> Result<R, RepositoryError> {
        self.storage.insert(id.value(), resource.clone());
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

#[test]
fn custom_id_map_controls_the_id_sequence() {
    let repo = InMemoryRepository::with_id_map(SequencedMap::new(1000));

    assert_eq!(repo.next_id().unwrap(), Id::new(1000));

    let first = repo.put(Order::new("user5", 1)).unwrap();
    let second = repo.put(Order::new("user6", 2)).unwrap();
    assert_eq!(first.id, Some(Id::new(1000)));
    assert_eq!(second.id, Some(Id::new(1001)));
}
