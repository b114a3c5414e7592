//! Activity API Handlers

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::NaiveDate;

use crate::core::ServerState;
use crate::db::repository::booking;
use crate::rules::{BookingActivity, DayStatus, aggregate_activity};
use crate::utils::AppResult;
use crate::utils::time::today;

/// GET /api/activity/:student_id
///
/// One display status per calendar day, aggregated over every booking the
/// student has ever held.
pub async fn by_student(
    State(state): State<ServerState>,
    Path(student_id): Path<String>,
) -> AppResult<Json<BTreeMap<NaiveDate, DayStatus>>> {
    let rows = booking::find_by_student(&state.pool, &student_id).await?;
    let items: Vec<BookingActivity> = rows
        .iter()
        .map(|b| BookingActivity {
            date: b.booking_date,
            attendance: b.attendance_status,
        })
        .collect();
    Ok(Json(aggregate_activity(&items, today())))
}
