//! Error taxonomy shared by the stores, the lifecycle engine and the API.

use thiserror::Error;

use crate::{engine::Command, state::TimerStatus};

/// Errors returned by core operations. None of them are transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Cannot {command} a {status} timer")]
    InvalidTransition { command: Command, status: TimerStatus },

    #[error("{kind} '{id}' already exists")]
    Conflict { kind: &'static str, id: String },
}

impl Error {
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        Self::NotFound { kind, id: id.to_string() }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
