//! Session Repository
//!
//! Sessions and their operating-day rules. Replacing a session's weekday
//! set happens in one transaction so readers never observe a half-updated
//! week.

use super::{RepoError, RepoResult};
use shared::models::{OperatingDay, Session, SessionCreate, SessionUpdate};
use sqlx::SqlitePool;

const SESSION_SELECT: &str = "SELECT id, zone_id, name, start_time, end_time, display_order, is_active FROM session";

pub async fn find_by_zone(pool: &SqlitePool, zone_id: i64) -> RepoResult<Vec<Session>> {
    let sql = format!(
        "{SESSION_SELECT} WHERE zone_id = ? AND is_active = 1 ORDER BY display_order, start_time"
    );
    let sessions = sqlx::query_as::<_, Session>(&sql)
        .bind(zone_id)
        .fetch_all(pool)
        .await?;
    Ok(sessions)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Session>> {
    let sql = format!("{SESSION_SELECT} WHERE id = ?");
    let session = sqlx::query_as::<_, Session>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(session)
}

/// Operating-day rows for all sessions of a zone
pub async fn find_operating_days_by_zone(
    pool: &SqlitePool,
    zone_id: i64,
) -> RepoResult<Vec<OperatingDay>> {
    let rows = sqlx::query_as::<_, OperatingDay>(
        "SELECT od.id, od.session_id, od.weekday, od.is_active FROM operating_day od JOIN session s ON od.session_id = s.id WHERE s.zone_id = ? AND s.is_active = 1",
    )
    .bind(zone_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

fn validate_weekdays(weekdays: &[u8]) -> RepoResult<()> {
    if let Some(bad) = weekdays.iter().find(|w| **w > 6) {
        return Err(RepoError::Validation(format!(
            "Invalid weekday {bad} (expected 0-6)"
        )));
    }
    Ok(())
}

fn validate_times(start: &str, end: &str) -> RepoResult<()> {
    let parse = |s: &str| chrono::NaiveTime::parse_from_str(s, "%H:%M");
    let (start_t, end_t) = match (parse(start), parse(end)) {
        (Ok(s), Ok(e)) => (s, e),
        _ => {
            return Err(RepoError::Validation(format!(
                "Invalid session time '{start}'..'{end}' (expected HH:MM)"
            )));
        }
    };
    // Half-open interval, no overnight wraparound
    if start_t >= end_t {
        return Err(RepoError::Validation(format!(
            "Session start {start} must be before end {end}"
        )));
    }
    Ok(())
}

pub async fn create(pool: &SqlitePool, data: SessionCreate) -> RepoResult<Session> {
    validate_times(&data.start_time, &data.end_time)?;
    validate_weekdays(&data.weekdays)?;

    let id = shared::util::snowflake_id();
    let mut tx = pool.begin().await?;
    sqlx::query(
        "INSERT INTO session (id, zone_id, name, start_time, end_time, display_order, is_active) VALUES (?, ?, ?, ?, ?, ?, 1)",
    )
    .bind(id)
    .bind(data.zone_id)
    .bind(&data.name)
    .bind(&data.start_time)
    .bind(&data.end_time)
    .bind(data.display_order.unwrap_or(0))
    .execute(&mut *tx)
    .await?;

    for weekday in dedup_weekdays(&data.weekdays) {
        sqlx::query(
            "INSERT INTO operating_day (id, session_id, weekday, is_active) VALUES (?, ?, ?, 1)",
        )
        .bind(shared::util::snowflake_id())
        .bind(id)
        .bind(weekday as i64)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create session".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: SessionUpdate) -> RepoResult<Session> {
    if let (Some(start), Some(end)) = (&data.start_time, &data.end_time) {
        validate_times(start, end)?;
    }
    let rows = sqlx::query(
        "UPDATE session SET name = COALESCE(?1, name), start_time = COALESCE(?2, start_time), end_time = COALESCE(?3, end_time), display_order = COALESCE(?4, display_order), is_active = COALESCE(?5, is_active) WHERE id = ?6",
    )
    .bind(&data.name)
    .bind(&data.start_time)
    .bind(&data.end_time)
    .bind(data.display_order)
    .bind(data.is_active)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Session {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Session {id} not found")))
}

/// Replace the session's weekday set atomically
pub async fn replace_operating_days(
    pool: &SqlitePool,
    session_id: i64,
    weekdays: &[u8],
) -> RepoResult<Vec<OperatingDay>> {
    validate_weekdays(weekdays)?;
    find_by_id(pool, session_id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Session {session_id} not found")))?;

    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM operating_day WHERE session_id = ?")
        .bind(session_id)
        .execute(&mut *tx)
        .await?;
    for weekday in dedup_weekdays(weekdays) {
        sqlx::query(
            "INSERT INTO operating_day (id, session_id, weekday, is_active) VALUES (?, ?, ?, 1)",
        )
        .bind(shared::util::snowflake_id())
        .bind(session_id)
        .bind(weekday as i64)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    let rows = sqlx::query_as::<_, OperatingDay>(
        "SELECT id, session_id, weekday, is_active FROM operating_day WHERE session_id = ? ORDER BY weekday",
    )
    .bind(session_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM booking WHERE session_id = ? AND booking_date >= date('now')",
    )
    .bind(id)
    .fetch_one(pool)
    .await?;
    if count > 0 {
        return Err(RepoError::Validation(
            "Cannot delete session with upcoming bookings".into(),
        ));
    }
    sqlx::query("DELETE FROM session WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(true)
}

fn dedup_weekdays(weekdays: &[u8]) -> Vec<u8> {
    let mut seen = std::collections::BTreeSet::new();
    weekdays.iter().copied().filter(|w| seen.insert(*w)).collect()
}
