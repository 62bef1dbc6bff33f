//! API request and response structures

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{error::Error, state::Timer};

/// Body of POST /timer/start
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartTimerRequest {
    /// Planned length in minutes
    pub duration: u32,
    #[serde(default)]
    pub room_id: Option<String>,
}

/// Body of POST /user/create
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
}

/// A timer together with its countdown as of the response time
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerResponse {
    #[serde(flatten)]
    pub timer: Timer,
    pub remaining_seconds: Option<i64>,
}

impl TimerResponse {
    pub fn new(timer: Timer, now: DateTime<Utc>) -> Self {
        let remaining_seconds = timer.remaining_seconds(now);
        Self { timer, remaining_seconds }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomResponse {
    pub room_id: String,
}

/// Server status with store sizes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub timers: usize,
    pub rooms: usize,
    pub users: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// JSON body sent with every client error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Wrapper mapping core errors onto HTTP responses
#[derive(Debug)]
pub struct ApiError(pub Error);

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self.0 {
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Error::InvalidTransition { .. } | Error::Conflict { .. } => StatusCode::CONFLICT,
        }
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            status: "error".to_string(),
            message: self.0.to_string(),
            timestamp: Utc::now(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
