//! Quarter API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::quarter;
use crate::utils::AppResult;
use shared::models::{Quarter, QuarterCreate};

/// GET /api/quarters
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Quarter>>> {
    let quarters = quarter::find_all(&state.pool).await?;
    Ok(Json(quarters))
}

/// POST /api/quarters
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<QuarterCreate>,
) -> AppResult<Json<Quarter>> {
    let quarter = quarter::create(&state.pool, payload).await?;
    Ok(Json(quarter))
}

/// DELETE /api/quarters/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = quarter::delete(&state.pool, id).await?;
    Ok(Json(result))
}
