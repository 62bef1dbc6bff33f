//! User records with sequential ids

use serde::{Deserialize, Serialize};

use super::store::{Entity, Store};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
}

impl Entity for User {
    type Id = u64;
    const KIND: &'static str = "User";

    fn id(&self) -> &u64 {
        &self.id
    }
}

#[derive(Debug, Default)]
pub struct UserStore {
    users: Store<User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a user with the next id, starting at 1
    pub fn create(&self, name: &str) -> Result<User> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidInput("user name must not be empty".into()));
        }
        // Users are never removed, so the count doubles as the id counter.
        self.users.create_with(|users| User {
            id: users.len() as u64 + 1,
            name: name.to_string(),
        })
    }

    pub fn get(&self, id: u64) -> Option<User> {
        self.users.get(&id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_increment_from_one() {
        let store = UserStore::new();
        assert_eq!(store.create("ada").unwrap().id, 1);
        assert_eq!(store.create("linus").unwrap().id, 2);
        assert_eq!(store.get(2).unwrap().name, "linus");
        assert!(store.get(3).is_none());
    }

    #[test]
    fn blank_name_is_rejected() {
        let store = UserStore::new();
        assert!(matches!(store.create("  "), Err(Error::InvalidInput(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn concurrent_creates_get_unique_ids() {
        let store = UserStore::new();
        std::thread::scope(|s| {
            for _ in 0..10 {
                s.spawn(|| {
                    for _ in 0..20 {
                        store.create("u").unwrap();
                    }
                });
            }
        });
        assert_eq!(store.len(), 200);
        assert!((1..=200).all(|id| store.get(id).is_some()));
    }
}
