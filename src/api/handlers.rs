//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::Json,
};
use tracing::debug;

use crate::{
    error::Error,
    state::{AppState, Room, Timer, User},
};
use super::responses::{
    ApiError, CreateRoomResponse, CreateUserRequest, HealthResponse, StartTimerRequest,
    StatusResponse, TimerResponse,
};

type ApiResult<T> = Result<Json<T>, ApiError>;

fn payload<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| Error::InvalidInput(rejection.body_text()).into())
}

fn timer_response(state: &AppState, timer: Timer) -> Json<TimerResponse> {
    Json(TimerResponse::new(timer, state.timers.now()))
}

/// Handle POST /room/create
pub async fn create_room_handler(State(state): State<Arc<AppState>>) -> ApiResult<CreateRoomResponse> {
    let room = state.create_room()?;
    Ok(Json(CreateRoomResponse { room_id: room.id }))
}

/// Handle GET /room/:id
pub async fn get_room_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Room> {
    Ok(Json(state.get_room(&id)?))
}

/// Handle GET /room/:id/timers
pub async fn room_timers_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Vec<TimerResponse>> {
    let now = state.timers.now();
    let timers = state
        .room_timers(&id)?
        .into_iter()
        .map(|timer| TimerResponse::new(timer, now))
        .collect();
    Ok(Json(timers))
}

/// Handle POST /user/create
pub async fn create_user_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<User> {
    let request = payload(body)?;
    Ok(Json(state.create_user(&request.name)?))
}

/// Handle GET /user/:id
pub async fn get_user_handler(
    State(state): State<Arc<AppState>>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<User> {
    let Path(id) = id.map_err(|rejection| ApiError(Error::InvalidInput(rejection.body_text())))?;
    Ok(Json(state.get_user(id)?))
}

/// Handle POST /timer/start
pub async fn start_timer_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<StartTimerRequest>, JsonRejection>,
) -> ApiResult<TimerResponse> {
    let request = payload(body)?;
    let timer = state.start_timer(request.duration, request.room_id)?;
    Ok(timer_response(&state, timer))
}

/// Handle POST /timer/pause/:id
pub async fn pause_timer_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<TimerResponse> {
    let timer = state.timers.pause(&id)?;
    Ok(timer_response(&state, timer))
}

/// Handle POST /timer/resume/:id
pub async fn resume_timer_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<TimerResponse> {
    let timer = state.timers.resume(&id)?;
    Ok(timer_response(&state, timer))
}

/// Handle POST /timer/stop/:id
pub async fn stop_timer_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<TimerResponse> {
    let timer = state.timers.stop(&id)?;
    Ok(timer_response(&state, timer))
}

/// Handle GET /timer/:id
pub async fn get_timer_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<TimerResponse> {
    debug!("Fetching timer '{}'", id);
    let timer = state.timers.get(&id)?;
    Ok(timer_response(&state, timer))
}

/// Handle GET /status - Return current server status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        timers: state.timers.len(),
        rooms: state.rooms.len(),
        users: state.users.len(),
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
