//! State management module
//!
//! This module contains the entities, the keyed store they live in, and the
//! application state object that owns them.

pub mod store;
pub mod timer;
pub mod room;
pub mod user;
pub mod app_state;

// Re-export main types
pub use store::{Entity, Store};
pub use timer::{Timer, TimerId, TimerStatus};
pub use room::{Room, RoomStore};
pub use user::{User, UserStore};
pub use app_state::AppState;
