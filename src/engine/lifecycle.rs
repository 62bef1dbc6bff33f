//! Pure timer state transitions

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::{
    error::{Error, Result},
    state::{Timer, TimerId, TimerStatus},
};

/// Commands that mutate an existing timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Pause,
    Resume,
    Stop,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Stop => "stop",
        })
    }
}

/// Build the initial running timer
pub fn start(id: TimerId, duration: u32, room_id: Option<String>, now: DateTime<Utc>) -> Result<Timer> {
    if duration == 0 {
        return Err(Error::InvalidInput("duration must be at least one minute".into()));
    }
    Ok(Timer {
        id,
        duration,
        status: TimerStatus::Running,
        started_at: now,
        paused_at: None,
        room_id,
    })
}

/// Compute the timer that results from applying `command` at `now`.
///
/// | from \ command | pause            | resume                    | stop    |
/// |----------------|------------------|---------------------------|---------|
/// | running        | paused at `now`  | no-op                     | stopped |
/// | paused         | no-op            | running, start shifted    | stopped |
/// | stopped        | rejected         | rejected                  | no-op   |
pub fn apply(timer: &Timer, command: Command, now: DateTime<Utc>) -> Result<Timer> {
    let mut next = timer.clone();
    match (command, timer.status) {
        (Command::Pause, TimerStatus::Running) => {
            next.status = TimerStatus::Paused;
            next.paused_at = Some(now);
        }
        (Command::Resume, TimerStatus::Paused) => {
            if let Some(paused_at) = timer.paused_at {
                // A clock stepping backwards must not move the start earlier.
                let paused_for = (now - paused_at).max(Duration::zero());
                next.started_at = timer.started_at + paused_for;
            }
            next.status = TimerStatus::Running;
            next.paused_at = None;
        }
        (Command::Stop, TimerStatus::Running | TimerStatus::Paused) => {
            next.status = TimerStatus::Stopped;
            next.paused_at = None;
        }
        (Command::Pause, TimerStatus::Paused)
        | (Command::Resume, TimerStatus::Running)
        | (Command::Stop, TimerStatus::Stopped) => {
            debug!("Timer '{}' already {}, {} is a no-op", timer.id, timer.status, command);
        }
        (Command::Pause | Command::Resume, TimerStatus::Stopped) => {
            return Err(Error::InvalidTransition {
                command,
                status: timer.status,
            });
        }
    }
    Ok(next)
}
