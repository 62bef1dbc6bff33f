//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// CORS policy admitting a single browser origin
pub fn cors_layer(origin: &str) -> Result<CorsLayer, header::InvalidHeaderValue> {
    Ok(CorsLayer::new()
        .allow_origin(origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/room/create", post(create_room_handler))
        .route("/room/:id", get(get_room_handler))
        .route("/room/:id/timers", get(room_timers_handler))
        .route("/user/create", post(create_user_handler))
        .route("/user/:id", get(get_user_handler))
        .route("/timer/start", post(start_timer_handler))
        .route("/timer/pause/:id", post(pause_timer_handler))
        .route("/timer/resume/:id", post(resume_timer_handler))
        .route("/timer/stop/:id", post(stop_timer_handler))
        .route("/timer/:id", get(get_timer_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
