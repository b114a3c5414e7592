//! Seat API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::{seat, zone};
use crate::utils::{AppError, AppResult};
use shared::models::{Seat, SeatCreate, SeatUpdate};

/// POST /api/seats
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SeatCreate>,
) -> AppResult<Json<Seat>> {
    zone::find_by_id(&state.pool, payload.zone_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Zone {} not found", payload.zone_id)))?;
    let seat = seat::create(&state.pool, payload).await?;
    Ok(Json(seat))
}

/// PUT /api/seats/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<SeatUpdate>,
) -> AppResult<Json<Seat>> {
    let seat = seat::update(&state.pool, id, payload).await?;
    Ok(Json(seat))
}

/// DELETE /api/seats/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = seat::delete(&state.pool, id).await?;
    Ok(Json(result))
}
