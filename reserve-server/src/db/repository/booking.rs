//! Booking Repository (reads)
//!
//! Writes go through the transaction coordinator in `crate::booking`; this
//! module only reads booking rows and their attendance/content joins.

use chrono::NaiveDate;

use super::RepoResult;
use shared::models::{Booking, BookingDetail};
use sqlx::SqlitePool;

const DETAIL_SELECT: &str = "SELECT b.id, b.booking_date, b.seat_id, b.session_id, b.user_id, b.student_id, b.created_at, s.section, s.seat_number, ss.name AS session_name, a.status AS attendance_status, sc.content \
    FROM booking b \
    JOIN seat s ON b.seat_id = s.id \
    JOIN session ss ON b.session_id = ss.id \
    LEFT JOIN attendance a ON a.booking_id = b.id \
    LEFT JOIN study_content sc ON sc.booking_id = b.id";

/// Occupancy view: all bookings for one zone and date
pub async fn find_by_zone_and_date(
    pool: &SqlitePool,
    zone_id: i64,
    date: NaiveDate,
) -> RepoResult<Vec<BookingDetail>> {
    let sql = format!(
        "{DETAIL_SELECT} WHERE s.zone_id = ? AND b.booking_date = ? ORDER BY s.section, s.seat_number"
    );
    let rows = sqlx::query_as::<_, BookingDetail>(&sql)
        .bind(zone_id)
        .bind(date)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// All of one student's bookings, newest first
pub async fn find_by_student(
    pool: &SqlitePool,
    student_id: &str,
) -> RepoResult<Vec<BookingDetail>> {
    let sql = format!("{DETAIL_SELECT} WHERE b.student_id = ? ORDER BY b.booking_date DESC");
    let rows = sqlx::query_as::<_, BookingDetail>(&sql)
        .bind(student_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// One student's bookings for a single date (edit/cancel flows)
pub async fn find_by_student_and_date(
    pool: &SqlitePool,
    student_id: &str,
    date: NaiveDate,
) -> RepoResult<Vec<Booking>> {
    let rows = sqlx::query_as::<_, Booking>(
        "SELECT id, booking_date, seat_id, session_id, user_id, student_id, created_at FROM booking WHERE student_id = ? AND booking_date = ?",
    )
    .bind(student_id)
    .bind(date)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_ids(pool: &SqlitePool, ids: &[i64]) -> RepoResult<Vec<Booking>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let placeholders = vec!["?"; ids.len()].join(", ");
    let sql = format!(
        "SELECT id, booking_date, seat_id, session_id, user_id, student_id, created_at FROM booking WHERE id IN ({placeholders})"
    );
    let mut query = sqlx::query_as::<_, Booking>(&sql);
    for id in ids {
        query = query.bind(id);
    }
    let rows = query.fetch_all(pool).await?;
    Ok(rows)
}
