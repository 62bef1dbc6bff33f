//! Concurrency-safe keyed storage shared by timers, rooms and users

use std::{
    collections::HashMap,
    fmt::{self, Debug, Display},
    hash::Hash,
    sync::{Mutex, MutexGuard, PoisonError},
};
use tracing::debug;

use crate::error::{Error, Result};

/// An entity that can be held in a [`Store`]
pub trait Entity: Clone + Debug + Send {
    type Id: Clone + Eq + Hash + Debug + Display + Send;

    /// Human readable kind used in error messages
    const KIND: &'static str;

    fn id(&self) -> &Self::Id;
}

/// Keyed repository guarded by a single mutex.
///
/// Every operation is one short critical section over the whole map, so
/// operations on the same id are totally ordered and each one observes the
/// fully applied result of the ones before it.
pub struct Store<E: Entity> {
    entries: Mutex<HashMap<E::Id, E>>,
}

impl<E: Entity> Store<E> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    // Values are only ever replaced whole, so a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<E::Id, E>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a new entity, rejecting an id that is already taken
    pub fn create(&self, entity: E) -> Result<E> {
        let mut entries = self.lock();
        if entries.contains_key(entity.id()) {
            return Err(Error::Conflict {
                kind: E::KIND,
                id: entity.id().to_string(),
            });
        }
        debug!("Created {} '{}'", E::KIND, entity.id());
        entries.insert(entity.id().clone(), entity.clone());
        Ok(entity)
    }

    /// Mint and insert an entity in one critical section.
    ///
    /// `mint` sees the current contents and must return an entity whose id
    /// is not present yet.
    pub fn create_with<F>(&self, mint: F) -> Result<E>
    where
        F: FnOnce(&HashMap<E::Id, E>) -> E,
    {
        let mut entries = self.lock();
        let entity = mint(&entries);
        if entries.contains_key(entity.id()) {
            return Err(Error::Conflict {
                kind: E::KIND,
                id: entity.id().to_string(),
            });
        }
        debug!("Created {} '{}'", E::KIND, entity.id());
        entries.insert(entity.id().clone(), entity.clone());
        Ok(entity)
    }

    /// Fetch the current value for `id`
    pub fn get(&self, id: &E::Id) -> Option<E> {
        self.lock().get(id).cloned()
    }

    /// Overwrite the stored value in full. Unknown ids are rejected.
    pub fn replace(&self, entity: E) -> Result<E> {
        let mut entries = self.lock();
        match entries.get_mut(entity.id()) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(entity)
            }
            None => Err(Error::not_found(E::KIND, entity.id())),
        }
    }

    /// Atomically compute the next value from the current one and store it.
    ///
    /// The read, the computation and the write happen under one lock hold,
    /// so `next` must not block. If `next` fails nothing is written.
    pub fn update<F>(&self, id: &E::Id, next: F) -> Result<E>
    where
        F: FnOnce(&E) -> Result<E>,
    {
        let mut entries = self.lock();
        let slot = entries
            .get_mut(id)
            .ok_or_else(|| Error::not_found(E::KIND, id))?;
        let updated = next(slot)?;
        debug_assert!(updated.id() == id, "update must not change the id");
        *slot = updated.clone();
        Ok(updated)
    }

    /// Number of stored entities
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of every entity matching `predicate`
    pub fn filter<P>(&self, predicate: P) -> Vec<E>
    where
        P: Fn(&E) -> bool,
    {
        self.lock().values().filter(|e| predicate(e)).cloned().collect()
    }
}

impl<E: Entity> Debug for Store<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("kind", &E::KIND)
            .field("len", &self.len())
            .finish()
    }
}

impl<E: Entity> Default for Store<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: u32,
        text: &'static str,
    }

    impl Entity for Note {
        type Id = u32;
        const KIND: &'static str = "Note";

        fn id(&self) -> &u32 {
            &self.id
        }
    }

    fn note(id: u32, text: &'static str) -> Note {
        Note { id, text }
    }

    #[test]
    fn create_then_get() {
        let store = Store::new();
        store.create(note(1, "a")).unwrap();
        assert_eq!(store.get(&1), Some(note(1, "a")));
        assert_eq!(store.get(&2), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn create_rejects_taken_id() {
        let store = Store::new();
        store.create(note(1, "a")).unwrap();
        let err = store.create(note(1, "b")).unwrap_err();
        assert_eq!(err, Error::Conflict { kind: "Note", id: "1".into() });
        assert_eq!(store.get(&1).unwrap().text, "a");
    }

    #[test]
    fn replace_overwrites_known_and_rejects_unknown() {
        let store = Store::new();
        store.create(note(1, "a")).unwrap();
        store.replace(note(1, "b")).unwrap();
        assert_eq!(store.get(&1).unwrap().text, "b");

        let err = store.replace(note(7, "x")).unwrap_err();
        assert_eq!(err, Error::not_found("Note", 7));
        assert!(store.get(&7).is_none());
    }

    #[test]
    fn failed_update_writes_nothing() {
        let store = Store::new();
        store.create(note(1, "a")).unwrap();
        let err = store
            .update(&1, |_| Err(Error::InvalidInput("nope".into())))
            .unwrap_err();
        assert_eq!(err, Error::InvalidInput("nope".into()));
        assert_eq!(store.get(&1).unwrap().text, "a");

        assert!(store.update(&9, |n| Ok(n.clone())).is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn create_with_sees_current_entries() {
        let store = Store::new();
        for _ in 0..3 {
            store
                .create_with(|entries| note(entries.len() as u32 + 1, "n"))
                .unwrap();
        }
        let mut ids: Vec<u32> = store.filter(|_| true).iter().map(|n| n.id).collect();
        ids.sort();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn concurrent_updates_are_not_lost() {
        #[derive(Debug, Clone)]
        struct Counter(u32, u64);
        impl Entity for Counter {
            type Id = u32;
            const KIND: &'static str = "Counter";
            fn id(&self) -> &u32 {
                &self.0
            }
        }

        let store = Store::new();
        store.create(Counter(0, 0)).unwrap();
        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..250 {
                        store.update(&0, |c| Ok(Counter(c.0, c.1 + 1))).unwrap();
                    }
                });
            }
        });
        assert_eq!(store.get(&0).unwrap().1, 2000);
    }
}
