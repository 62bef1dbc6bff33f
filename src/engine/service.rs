//! Timer commands: the lifecycle rules applied against the timer store

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use super::{
    clock::{Clock, SystemClock},
    lifecycle::{self, Command},
};
use crate::{
    error::{Error, Result},
    state::{Store, Timer},
};

/// Entry point for every timer command.
///
/// Holds no lifecycle state of its own; all mutable state lives in the store
/// and each command is a single atomic `update` on it.
pub struct TimerService {
    store: Store<Timer>,
    clock: Arc<dyn Clock>,
}

impl TimerService {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Store::new(),
            clock,
        }
    }

    /// Start a new running timer under a fresh id
    pub fn start(&self, duration: u32, room_id: Option<String>) -> Result<Timer> {
        let id = Uuid::new_v4().to_string();
        let timer = lifecycle::start(id, duration, room_id, self.clock.now())?;
        let timer = self.store.create(timer)?;
        info!("Started timer '{}' for {} minutes", timer.id, timer.duration);
        Ok(timer)
    }

    pub fn pause(&self, id: &str) -> Result<Timer> {
        self.apply(id, Command::Pause)
    }

    pub fn resume(&self, id: &str) -> Result<Timer> {
        self.apply(id, Command::Resume)
    }

    pub fn stop(&self, id: &str) -> Result<Timer> {
        self.apply(id, Command::Stop)
    }

    pub fn get(&self, id: &str) -> Result<Timer> {
        self.store
            .get(&id.to_string())
            .ok_or_else(|| Error::not_found("Timer", id))
    }

    /// Timers started in the given room
    pub fn in_room(&self, room_id: &str) -> Vec<Timer> {
        let mut timers = self
            .store
            .filter(|t| t.room_id.as_deref() == Some(room_id));
        timers.sort_by(|a, b| a.started_at.cmp(&b.started_at).then_with(|| a.id.cmp(&b.id)));
        timers
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Current time as seen by the engine
    pub fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.clock.now()
    }

    fn apply(&self, id: &str, command: Command) -> Result<Timer> {
        // The clock is read under the store lock so operations ordered on one
        // id also see ordered timestamps.
        let result = self
            .store
            .update(&id.to_string(), |timer| lifecycle::apply(timer, command, self.clock.now()));

        match &result {
            Ok(timer) => info!("Timer '{}' {} -> {}", id, command, timer.status),
            Err(e) => warn!("Timer '{}' {} rejected: {}", id, command, e),
        }
        result
    }
}

impl Default for TimerService {
    fn default() -> Self {
        Self::new()
    }
}
