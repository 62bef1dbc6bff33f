//! Timer entity and its derived time accounting

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::store::Entity;

pub type TimerId = String;

/// Lifecycle status of a timer. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    Running,
    Paused,
    Stopped,
}

impl TimerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Stopped => "stopped",
        }
    }
}

impl fmt::Display for TimerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One countdown session.
///
/// `started_at` is the logical start of the running clock: it is shifted
/// forward on every resume so that `now - started_at` never counts paused
/// intervals. `paused_at` is `Some` exactly while the status is `Paused`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timer {
    pub id: TimerId,
    /// Planned length in minutes
    pub duration: u32,
    pub status: TimerStatus,
    pub started_at: DateTime<Utc>,
    pub paused_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
}

impl Timer {
    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    pub fn is_paused(&self) -> bool {
        self.status == TimerStatus::Paused
    }

    pub fn is_stopped(&self) -> bool {
        self.status == TimerStatus::Stopped
    }

    /// Running time accumulated so far, excluding pauses.
    ///
    /// Frozen at the pause instant while paused; `None` once stopped.
    pub fn elapsed(&self, now: DateTime<Utc>) -> Option<Duration> {
        let until = match (self.status, self.paused_at) {
            (TimerStatus::Running, _) => now,
            (TimerStatus::Paused, Some(paused_at)) => paused_at,
            (TimerStatus::Paused, None) | (TimerStatus::Stopped, _) => return None,
        };
        Some((until - self.started_at).max(Duration::zero()))
    }

    /// Seconds left on the countdown, floored at zero
    pub fn remaining_seconds(&self, now: DateTime<Utc>) -> Option<i64> {
        let elapsed = self.elapsed(now)?;
        let total = i64::from(self.duration) * 60;
        Some((total - elapsed.num_seconds()).max(0))
    }
}

impl Entity for Timer {
    type Id = TimerId;
    const KIND: &'static str = "Timer";

    fn id(&self) -> &TimerId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn timer(status: TimerStatus, paused_at: Option<DateTime<Utc>>) -> Timer {
        Timer {
            id: "abc".into(),
            duration: 25,
            status,
            started_at: t(0),
            paused_at,
            room_id: None,
        }
    }

    #[test]
    fn serializes_with_camel_case_and_null_pause() {
        let value = serde_json::to_value(timer(TimerStatus::Running, None)).unwrap();
        assert_eq!(value["status"], "running");
        assert_eq!(value["duration"], 25);
        assert!(value["startedAt"].is_string());
        assert!(value["pausedAt"].is_null());
        assert!(value.get("roomId").is_none());

        let paused = serde_json::to_value(timer(TimerStatus::Paused, Some(t(60)))).unwrap();
        assert!(paused["pausedAt"].is_string());
    }

    #[test]
    fn elapsed_is_frozen_while_paused() {
        let running = timer(TimerStatus::Running, None);
        assert_eq!(running.elapsed(t(90)), Some(Duration::seconds(90)));
        assert_eq!(running.remaining_seconds(t(90)), Some(25 * 60 - 90));

        let paused = timer(TimerStatus::Paused, Some(t(60)));
        assert_eq!(paused.elapsed(t(600)), Some(Duration::seconds(60)));
    }

    #[test]
    fn remaining_floors_at_zero_and_stopped_has_none() {
        let running = timer(TimerStatus::Running, None);
        assert_eq!(running.remaining_seconds(t(3 * 3600)), Some(0));
        assert_eq!(timer(TimerStatus::Stopped, None).remaining_seconds(t(10)), None);
    }
}
