//! Main application state

use std::{sync::Arc, time::Instant};
use tracing::info;

use super::{Room, RoomStore, Timer, User, UserStore};
use crate::{
    engine::{Clock, SystemClock, TimerService},
    error::{Error, Result},
};

/// Application state shared by all handlers.
///
/// Constructed once at startup and passed to the router; there is no global
/// state behind it.
pub struct AppState {
    pub timers: TimerService,
    pub rooms: RoomStore,
    pub users: UserStore,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
}

impl AppState {
    /// Create a new AppState reading the system clock
    pub fn new(port: u16, host: String) -> Self {
        Self::with_clock(port, host, Arc::new(SystemClock))
    }

    pub fn with_clock(port: u16, host: String, clock: Arc<dyn Clock>) -> Self {
        Self {
            timers: TimerService::with_clock(clock),
            rooms: RoomStore::new(),
            users: UserStore::new(),
            start_time: Instant::now(),
            port,
            host,
        }
    }

    /// Start a timer, optionally attached to an existing room
    pub fn start_timer(&self, duration: u32, room_id: Option<String>) -> Result<Timer> {
        if let Some(room_id) = room_id.as_deref() {
            if self.rooms.get(room_id).is_none() {
                return Err(Error::not_found("Room", room_id));
            }
        }
        self.timers.start(duration, room_id)
    }

    pub fn create_room(&self) -> Result<Room> {
        let room = self.rooms.create()?;
        info!("Created room '{}'", room.id);
        Ok(room)
    }

    pub fn get_room(&self, id: &str) -> Result<Room> {
        self.rooms.get(id).ok_or_else(|| Error::not_found("Room", id))
    }

    /// Timers of an existing room, oldest first
    pub fn room_timers(&self, id: &str) -> Result<Vec<Timer>> {
        let room = self.get_room(id)?;
        Ok(self.timers.in_room(&room.id))
    }

    pub fn create_user(&self, name: &str) -> Result<User> {
        let user = self.users.create(name)?;
        info!("Created user {} '{}'", user.id, user.name);
        Ok(user)
    }

    pub fn get_user(&self, id: u64) -> Result<User> {
        self.users.get(id).ok_or_else(|| Error::not_found("User", id))
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
