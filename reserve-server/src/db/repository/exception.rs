//! Calendar Exception Repository

use super::{RepoError, RepoResult};
use shared::models::{CalendarException, CalendarExceptionCreate};
use sqlx::SqlitePool;

pub async fn find_by_zone(pool: &SqlitePool, zone_id: i64) -> RepoResult<Vec<CalendarException>> {
    let rows = sqlx::query_as::<_, CalendarException>(
        "SELECT id, zone_id, exception_date, is_closed, note FROM calendar_exception WHERE zone_id = ? ORDER BY exception_date",
    )
    .bind(zone_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn create(
    pool: &SqlitePool,
    zone_id: i64,
    data: CalendarExceptionCreate,
) -> RepoResult<CalendarException> {
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO calendar_exception (id, zone_id, exception_date, is_closed, note) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(zone_id)
    .bind(data.exception_date)
    .bind(data.is_closed)
    .bind(&data.note)
    .execute(pool)
    .await
    .map_err(|e| match RepoError::from(e) {
        RepoError::Duplicate(_) => RepoError::Duplicate(format!(
            "An exception for {} already exists in this zone",
            data.exception_date
        )),
        other => other,
    })?;

    let row = sqlx::query_as::<_, CalendarException>(
        "SELECT id, zone_id, exception_date, is_closed, note FROM calendar_exception WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    row.ok_or_else(|| RepoError::Database("Failed to create exception".into()))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM calendar_exception WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Exception {id} not found")));
    }
    Ok(true)
}
