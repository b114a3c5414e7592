//! Calendar View API Handlers
//!
//! Evaluates the scheduling rules over a date range so clients can paint a
//! month grid in one request instead of probing day by day.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::repository::{exception, quarter, session, zone};
use crate::rules::CalendarRules;
use crate::utils::time::today;
use crate::utils::{AppError, AppResult};

/// Longest range a single request may evaluate
const MAX_RANGE_DAYS: i64 = 370;

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// One evaluated day in the range
#[derive(Debug, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// The zone operates on this date
    pub operating: bool,
    /// A booking submitted today would pass the window gates for this date
    pub bookable: bool,
    /// Session ids active on this weekday, empty when not operating
    pub sessions: Vec<i64>,
}

/// GET /api/zones/:zone_id/calendar?from=YYYY-MM-DD&to=YYYY-MM-DD
pub async fn range_view(
    State(state): State<ServerState>,
    Path(zone_id): Path<i64>,
    Query(query): Query<CalendarQuery>,
) -> AppResult<Json<Vec<CalendarDay>>> {
    if query.to < query.from {
        return Err(AppError::validation("Range end precedes range start"));
    }
    if (query.to - query.from).num_days() > MAX_RANGE_DAYS {
        return Err(AppError::validation(format!(
            "Range exceeds {MAX_RANGE_DAYS} days"
        )));
    }
    zone::find_by_id(&state.pool, zone_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Zone {zone_id} not found")))?;

    // One snapshot serves the whole range
    let (quarters, exceptions, operating_days) = tokio::try_join!(
        quarter::find_all(&state.pool),
        exception::find_by_zone(&state.pool, zone_id),
        session::find_operating_days_by_zone(&state.pool, zone_id),
    )?;
    let rules = CalendarRules {
        quarters,
        exceptions,
        operating_days,
    };
    let window = state.booking_window();
    let today = today();

    let mut days = Vec::new();
    let mut date = query.from;
    while date <= query.to {
        let operating = rules.is_operating(date);
        days.push(CalendarDay {
            date,
            operating,
            bookable: operating && window.is_date_bookable(today, date, &rules),
            sessions: if operating {
                rules.active_sessions(date).into_iter().collect()
            } else {
                Vec::new()
            },
        });
        date += Duration::days(1);
    }

    Ok(Json(days))
}
