//! Timer lifecycle engine
//!
//! `lifecycle` holds the pure transition rules, `service` composes them
//! with the timer store, and `clock` abstracts wall-clock reads.

pub mod clock;
pub mod lifecycle;
pub mod service;

pub use clock::{Clock, ManualClock, SystemClock};
pub use lifecycle::Command;
pub use service::TimerService;
