//! Booking API Handlers
//!
//! Submission runs three gates in order: payload validation, the
//! booking-window policy, then grade access. Only after all three does the
//! transaction coordinator touch the database.

use std::collections::{BTreeSet, HashMap};

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use validator::Validate;

use crate::booking::{self, BookingRequest, BookingSubject};
use crate::core::ServerState;
use crate::db::repository::{booking as booking_repo, config, exception, quarter, seat, session};
use crate::rules::{AccessDecision, CalendarRules, access};
use crate::utils::time::today;
use crate::utils::{AppError, AppResult};
use shared::models::BookingDetail;

/// One zone's scheduling-rule snapshot, fetched concurrently
async fn zone_rules(pool: &SqlitePool, zone_id: i64) -> AppResult<CalendarRules> {
    let (quarters, exceptions, operating_days) = tokio::try_join!(
        quarter::find_all(pool),
        exception::find_by_zone(pool, zone_id),
        session::find_operating_days_by_zone(pool, zone_id),
    )?;
    Ok(CalendarRules {
        quarters,
        exceptions,
        operating_days,
    })
}

#[derive(Debug, Deserialize)]
pub struct OccupancyQuery {
    pub zone_id: i64,
    pub date: NaiveDate,
}

/// GET /api/bookings?zone_id=&date= - occupancy view for one zone and day
pub async fn occupancy(
    State(state): State<ServerState>,
    Query(query): Query<OccupancyQuery>,
) -> AppResult<Json<Vec<BookingDetail>>> {
    let rows = booking_repo::find_by_zone_and_date(&state.pool, query.zone_id, query.date).await?;
    Ok(Json(rows))
}

/// GET /api/bookings/user/:student_id
pub async fn list_by_student(
    State(state): State<ServerState>,
    Path(student_id): Path<String>,
) -> AppResult<Json<Vec<BookingDetail>>> {
    let rows = booking_repo::find_by_student(&state.pool, &student_id).await?;
    Ok(Json(rows))
}

#[derive(Debug, Deserialize, Validate)]
pub struct BookingSubmitPayload {
    #[validate(length(min = 1))]
    pub student_id: String,
    /// Present when staff books on behalf of the student
    pub actor_id: Option<String>,
    /// The student's own account id, when their account is linked
    pub linked_user_id: Option<String>,
    pub date: NaiveDate,
    pub zone_id: i64,
    #[validate(length(min = 1))]
    pub section: String,
    #[validate(length(min = 1))]
    pub seat_number: String,
    #[validate(length(min = 1))]
    pub session_ids: Vec<i64>,
    #[serde(default)]
    pub study_content: HashMap<i64, String>,
    #[serde(default)]
    pub replacing_booking_ids: Vec<i64>,
}

impl BookingSubmitPayload {
    fn subject(&self) -> BookingSubject {
        match &self.actor_id {
            Some(actor_id) => BookingSubject::OnBehalf {
                actor_id: actor_id.clone(),
                student_id: self.student_id.clone(),
            },
            None => BookingSubject::SelfService {
                student_id: self.student_id.clone(),
                linked_user_id: self.linked_user_id.clone(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookingSubmitResponse {
    pub booking_ids: Vec<i64>,
}

/// POST /api/bookings
pub async fn submit(
    State(state): State<ServerState>,
    Json(payload): Json<BookingSubmitPayload>,
) -> AppResult<Json<BookingSubmitResponse>> {
    payload.validate()?;

    let rules = zone_rules(&state.pool, payload.zone_id).await?;
    let window = state.booking_window();
    if !window.is_date_bookable(today(), payload.date, &rules) {
        return Err(AppError::business_rule(format!(
            "Date {} is not open for booking",
            payload.date
        )));
    }

    let restrictions = config::get_restriction_config(&state.pool).await?;
    let grade = access::grade_from_student_id(&payload.student_id);
    if let AccessDecision::Denied { section, permitted } =
        access::check_access(&restrictions, payload.zone_id, &payload.section, grade)
    {
        return Err(AppError::forbidden(format!(
            "Section '{section}' is limited to grades {permitted:?}"
        )));
    }

    let subject = payload.subject();
    let outcome = booking::submit(
        &state.pool,
        BookingRequest {
            subject,
            date: payload.date,
            zone_id: payload.zone_id,
            section: payload.section,
            seat_number: payload.seat_number,
            session_ids: payload.session_ids,
            study_content: payload.study_content,
            replacing_booking_ids: payload.replacing_booking_ids,
        },
    )
    .await?;

    Ok(Json(BookingSubmitResponse {
        booking_ids: outcome.booking_ids,
    }))
}

#[derive(Debug, Deserialize, Validate)]
pub struct BookingCancelPayload {
    #[validate(length(min = 1))]
    pub student_id: String,
    #[validate(length(min = 1))]
    pub booking_ids: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct BookingCancelResponse {
    pub cancelled: u64,
}

/// POST /api/bookings/cancel
///
/// Cancellation runs the same full booking-window gate as creation and
/// modification: a date inside the notice window, outside its quarter's
/// lead time, or closed by an exception can no longer be changed. Rows
/// belonging to another student are rejected outright rather than
/// silently skipped.
pub async fn cancel(
    State(state): State<ServerState>,
    Json(payload): Json<BookingCancelPayload>,
) -> AppResult<Json<BookingCancelResponse>> {
    payload.validate()?;

    let ids: Vec<i64> = payload
        .booking_ids
        .iter()
        .copied()
        .collect::<BTreeSet<i64>>()
        .into_iter()
        .collect();
    let rows = booking_repo::find_by_ids(&state.pool, &ids).await?;
    if rows.len() != ids.len() {
        return Err(AppError::not_found("One or more bookings do not exist"));
    }
    if rows.iter().any(|b| b.student_id != payload.student_id) {
        return Err(AppError::forbidden(
            "Bookings belong to a different student",
        ));
    }

    let window = state.booking_window();
    let today = today();
    let mut rules_by_zone: HashMap<i64, CalendarRules> = HashMap::new();
    for booking in &rows {
        let seat = seat::find_by_id(&state.pool, booking.seat_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Seat {} not found", booking.seat_id)))?;
        if !rules_by_zone.contains_key(&seat.zone_id) {
            let rules = zone_rules(&state.pool, seat.zone_id).await?;
            rules_by_zone.insert(seat.zone_id, rules);
        }
        let rules = &rules_by_zone[&seat.zone_id];
        if !window.is_date_bookable(today, booking.booking_date, rules) {
            return Err(AppError::business_rule(format!(
                "Booking for {} can no longer be changed",
                booking.booking_date
            )));
        }
    }

    let cancelled = booking::cancel(&state.pool, &payload.student_id, &ids).await?;
    Ok(Json(BookingCancelResponse { cancelled }))
}
