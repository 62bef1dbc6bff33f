//! Rooms group timers belonging to the same session

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::store::{Entity, Store};
use crate::error::Result;

const CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const CODE_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
}

impl Entity for Room {
    type Id = String;
    const KIND: &'static str = "Room";

    fn id(&self) -> &String {
        &self.id
    }
}

fn generate_code<R: Rng>(rng: &mut R) -> String {
    (0..CODE_LEN)
        .map(|_| CODE_CHARSET[rng.gen_range(0..CODE_CHARSET.len())] as char)
        .collect()
}

/// Room store that hands out short random codes
#[derive(Debug, Default)]
pub struct RoomStore {
    rooms: Store<Room>,
}

impl RoomStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a room under a fresh code, retrying on collision
    pub fn create(&self) -> Result<Room> {
        let mut rng = rand::thread_rng();
        self.rooms.create_with(|rooms| loop {
            let id = generate_code(&mut rng);
            if !rooms.contains_key(&id) {
                break Room { id };
            }
        })
    }

    pub fn get(&self, id: &str) -> Option<Room> {
        self.rooms.get(&id.to_string())
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_use_charset_and_length() {
        let mut rng = rand::thread_rng();
        let code = generate_code(&mut rng);
        assert_eq!(code.len(), CODE_LEN);
        assert!(code.bytes().all(|b| CODE_CHARSET.contains(&b)));
    }

    #[test]
    fn created_rooms_are_distinct_and_fetchable() {
        let store = RoomStore::new();
        let ids: HashSet<String> = (0..200).map(|_| store.create().unwrap().id).collect();
        assert_eq!(ids.len(), 200);
        assert_eq!(store.len(), 200);
        for id in &ids {
            assert_eq!(store.get(id).unwrap().id, *id);
        }
        assert!(store.get("nope").is_none());
    }
}
