//! Room Timer - An in-memory HTTP server for pausable countdown timers
//!
//! This library provides the timer lifecycle engine, the concurrency-safe
//! stores behind it, and the HTTP API that exposes rooms, users and timers.

pub mod config;
pub mod error;
pub mod state;
pub mod engine;
pub mod api;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
pub use api::create_router;
pub use utils::signals::shutdown_signal;
