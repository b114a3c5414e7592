//! Zone API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::{seat, session, zone};
use crate::utils::{AppError, AppResult};
use shared::models::{Seat, Session, Zone, ZoneCreate, ZoneUpdate};

/// GET /api/zones - all active zones
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Zone>>> {
    let zones = zone::find_all(&state.pool).await?;
    Ok(Json(zones))
}

/// GET /api/zones/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Zone>> {
    let zone = zone::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Zone {id} not found")))?;
    Ok(Json(zone))
}

/// POST /api/zones
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ZoneCreate>,
) -> AppResult<Json<Zone>> {
    let zone = zone::create(&state.pool, payload).await?;
    Ok(Json(zone))
}

/// PUT /api/zones/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ZoneUpdate>,
) -> AppResult<Json<Zone>> {
    let zone = zone::update(&state.pool, id, payload).await?;
    Ok(Json(zone))
}

/// DELETE /api/zones/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = zone::delete(&state.pool, id).await?;
    Ok(Json(result))
}

/// GET /api/zones/:id/seats - seat map data for one zone
pub async fn list_seats(
    State(state): State<ServerState>,
    Path(zone_id): Path<i64>,
) -> AppResult<Json<Vec<Seat>>> {
    let seats = seat::find_by_zone(&state.pool, zone_id).await?;
    Ok(Json(seats))
}

/// GET /api/zones/:id/sessions - active sessions of one zone
pub async fn list_sessions(
    State(state): State<ServerState>,
    Path(zone_id): Path<i64>,
) -> AppResult<Json<Vec<Session>>> {
    let sessions = session::find_by_zone(&state.pool, zone_id).await?;
    Ok(Json(sessions))
}
