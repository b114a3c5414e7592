//! Calendar Exception API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::{exception, zone};
use crate::utils::{AppError, AppResult};
use shared::models::{CalendarException, CalendarExceptionCreate};

/// GET /api/zones/:zone_id/exceptions
pub async fn list_by_zone(
    State(state): State<ServerState>,
    Path(zone_id): Path<i64>,
) -> AppResult<Json<Vec<CalendarException>>> {
    let exceptions = exception::find_by_zone(&state.pool, zone_id).await?;
    Ok(Json(exceptions))
}

/// POST /api/zones/:zone_id/exceptions
pub async fn create(
    State(state): State<ServerState>,
    Path(zone_id): Path<i64>,
    Json(payload): Json<CalendarExceptionCreate>,
) -> AppResult<Json<CalendarException>> {
    zone::find_by_id(&state.pool, zone_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Zone {zone_id} not found")))?;
    let exception = exception::create(&state.pool, zone_id, payload).await?;
    Ok(Json(exception))
}

/// DELETE /api/exceptions/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = exception::delete(&state.pool, id).await?;
    Ok(Json(result))
}
