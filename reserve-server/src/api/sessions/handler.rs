//! Session API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::{session, zone};
use crate::utils::{AppError, AppResult};
use shared::models::{OperatingDay, OperatingDaysReplace, Session, SessionCreate, SessionUpdate};

/// POST /api/sessions - create a session with its weekday rules
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SessionCreate>,
) -> AppResult<Json<Session>> {
    zone::find_by_id(&state.pool, payload.zone_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Zone {} not found", payload.zone_id)))?;
    let session = session::create(&state.pool, payload).await?;
    Ok(Json(session))
}

/// PUT /api/sessions/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<SessionUpdate>,
) -> AppResult<Json<Session>> {
    let session = session::update(&state.pool, id, payload).await?;
    Ok(Json(session))
}

/// PUT /api/sessions/:id/operating-days - replace the weekday set
pub async fn replace_operating_days(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<OperatingDaysReplace>,
) -> AppResult<Json<Vec<OperatingDay>>> {
    let days = session::replace_operating_days(&state.pool, id, &payload.weekdays).await?;
    Ok(Json(days))
}

/// DELETE /api/sessions/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = session::delete(&state.pool, id).await?;
    Ok(Json(result))
}
