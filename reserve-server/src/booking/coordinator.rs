//! Booking transaction coordinator
//!
//! The only component allowed to perform a destructive multi-row
//! mutation. Everything happens inside one SQLite transaction: deleting
//! the replaced bookings, inserting one booking row per unique session,
//! and inserting each row's study content. Any failure rolls the whole
//! set back: readers never observe a partial delete or insert.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::db::repository::{seat, session};
use super::error::BookingError;
use super::resolve::resolve_seat;

/// Who the booking is for, and who is creating it
#[derive(Debug, Clone)]
pub enum BookingSubject {
    /// A student booking for themselves; `linked_user_id` is their
    /// account id, absent for unlinked students
    SelfService {
        student_id: String,
        linked_user_id: Option<String>,
    },
    /// Staff booking on behalf of an explicit student
    OnBehalf {
        actor_id: String,
        student_id: String,
    },
}

impl BookingSubject {
    pub fn student_id(&self) -> &str {
        match self {
            BookingSubject::SelfService { student_id, .. } => student_id,
            BookingSubject::OnBehalf { student_id, .. } => student_id,
        }
    }

    /// The "created-by" account recorded on the booking rows
    pub fn user_id(&self) -> Option<&str> {
        match self {
            BookingSubject::SelfService { linked_user_id, .. } => linked_user_id.as_deref(),
            BookingSubject::OnBehalf { actor_id, .. } => Some(actor_id),
        }
    }
}

/// One booking submission: create or replace a set of session bookings
/// for a single (date, seat)
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub subject: BookingSubject,
    pub date: NaiveDate,
    pub zone_id: i64,
    pub section: String,
    pub seat_number: String,
    /// Session ids to book; duplicates are collapsed
    pub session_ids: Vec<i64>,
    /// Per-session study plan text; missing entries become empty content
    pub study_content: HashMap<i64, String>,
    /// Bookings to delete in the same transaction (edit mode). Seat
    /// changes during an edit are a wizard policy, not checked here.
    pub replacing_booking_ids: Vec<i64>,
}

/// Result of a successful submission
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub booking_ids: Vec<i64>,
}

/// Commit a booking set atomically
pub async fn submit(
    pool: &SqlitePool,
    req: BookingRequest,
) -> Result<SubmitOutcome, BookingError> {
    let session_set: BTreeSet<i64> = req.session_ids.iter().copied().collect();
    if session_set.is_empty() {
        return Err(BookingError::Validation("No sessions selected".into()));
    }
    if req.subject.student_id().trim().is_empty() {
        return Err(BookingError::Validation("Missing student identifier".into()));
    }

    // Resolve the seat against the zone's current seat list
    let seats = seat::find_by_zone(pool, req.zone_id)
        .await
        .map_err(|e| BookingError::Store(e.to_string()))?;
    let seat = resolve_seat(&seats, &req.section, &req.seat_number).ok_or_else(|| {
        BookingError::SeatNotFound {
            section: req.section.clone(),
            seat_number: req.seat_number.clone(),
        }
    })?;

    // Every requested session must belong to the zone
    let zone_sessions: BTreeSet<i64> = session::find_by_zone(pool, req.zone_id)
        .await
        .map_err(|e| BookingError::Store(e.to_string()))?
        .iter()
        .map(|s| s.id)
        .collect();
    if let Some(bad) = session_set.iter().find(|id| !zone_sessions.contains(id)) {
        return Err(BookingError::Validation(format!(
            "Session {bad} does not belong to this zone"
        )));
    }

    let student_id = req.subject.student_id().to_string();
    let user_id = req.subject.user_id().map(str::to_string);
    let now = shared::util::now_millis();

    let mut tx = pool.begin().await?;

    // Edit mode: drop the replaced rows first, scoped to the subject so a
    // stale id can never delete someone else's booking
    for booking_id in &req.replacing_booking_ids {
        sqlx::query("DELETE FROM booking WHERE id = ? AND student_id = ?")
            .bind(booking_id)
            .bind(&student_id)
            .execute(&mut *tx)
            .await?;
    }

    let mut booking_ids = Vec::with_capacity(session_set.len());
    for session_id in &session_set {
        let booking_id = shared::util::snowflake_id();
        sqlx::query(
            "INSERT INTO booking (id, booking_date, seat_id, session_id, user_id, student_id, created_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(booking_id)
        .bind(req.date)
        .bind(seat.id)
        .bind(session_id)
        .bind(&user_id)
        .bind(&student_id)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        let content = req
            .study_content
            .get(session_id)
            .map(String::as_str)
            .unwrap_or("");
        sqlx::query("INSERT INTO study_content (booking_id, content) VALUES (?, ?)")
            .bind(booking_id)
            .bind(content)
            .execute(&mut *tx)
            .await?;

        booking_ids.push(booking_id);
    }

    tx.commit().await?;

    tracing::info!(
        student_id = %student_id,
        date = %req.date,
        seat_id = seat.id,
        sessions = booking_ids.len(),
        replaced = req.replacing_booking_ids.len(),
        "Booking committed"
    );

    Ok(SubmitOutcome { booking_ids })
}

/// Cancel bookings by id, scoped to their subject. Returns the number of
/// rows removed; study content follows via ON DELETE CASCADE.
pub async fn cancel(
    pool: &SqlitePool,
    student_id: &str,
    booking_ids: &[i64],
) -> Result<u64, BookingError> {
    if booking_ids.is_empty() {
        return Err(BookingError::Validation("No bookings selected".into()));
    }
    let mut tx = pool.begin().await?;
    let mut removed = 0;
    for booking_id in booking_ids {
        let result = sqlx::query("DELETE FROM booking WHERE id = ? AND student_id = ?")
            .bind(booking_id)
            .bind(student_id)
            .execute(&mut *tx)
            .await?;
        removed += result.rows_affected();
    }
    tx.commit().await?;

    tracing::info!(student_id, removed, "Bookings cancelled");
    Ok(removed)
}
