//! Grade Restriction API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::config;
use crate::utils::AppResult;
use shared::models::RestrictionConfig;

/// GET /api/restrictions
pub async fn get_config(State(state): State<ServerState>) -> AppResult<Json<RestrictionConfig>> {
    let cfg = config::get_restriction_config(&state.pool).await?;
    Ok(Json(cfg))
}

/// PUT /api/restrictions - replace the whole config document
pub async fn put_config(
    State(state): State<ServerState>,
    Json(payload): Json<RestrictionConfig>,
) -> AppResult<Json<RestrictionConfig>> {
    config::set_restriction_config(&state.pool, &payload).await?;
    Ok(Json(payload))
}
