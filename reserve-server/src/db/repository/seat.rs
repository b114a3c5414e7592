//! Seat Repository

use super::{RepoError, RepoResult};
use shared::models::{Seat, SeatCreate, SeatUpdate};
use sqlx::SqlitePool;

const SEAT_SELECT: &str = "SELECT id, zone_id, section, seat_number, seat_type, pos_x, pos_y, width, height, rotation, is_active FROM seat";

pub async fn find_by_zone(pool: &SqlitePool, zone_id: i64) -> RepoResult<Vec<Seat>> {
    let sql = format!(
        "{SEAT_SELECT} WHERE zone_id = ? AND is_active = 1 ORDER BY section, seat_number"
    );
    let seats = sqlx::query_as::<_, Seat>(&sql)
        .bind(zone_id)
        .fetch_all(pool)
        .await?;
    Ok(seats)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Seat>> {
    let sql = format!("{SEAT_SELECT} WHERE id = ?");
    let seat = sqlx::query_as::<_, Seat>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(seat)
}

pub async fn create(pool: &SqlitePool, data: SeatCreate) -> RepoResult<Seat> {
    // Duplicate label guard within the zone
    let existing: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM seat WHERE zone_id = ? AND section = ? AND seat_number = ? AND is_active = 1",
    )
    .bind(data.zone_id)
    .bind(&data.section)
    .bind(&data.seat_number)
    .fetch_one(pool)
    .await?;
    if existing > 0 {
        return Err(RepoError::Duplicate(format!(
            "Seat '{}' already exists in section '{}'",
            data.seat_number, data.section
        )));
    }

    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO seat (id, zone_id, section, seat_number, seat_type, pos_x, pos_y, width, height, rotation, is_active) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 1)",
    )
    .bind(id)
    .bind(data.zone_id)
    .bind(&data.section)
    .bind(&data.seat_number)
    .bind(&data.seat_type)
    .bind(data.pos_x)
    .bind(data.pos_y)
    .bind(data.width)
    .bind(data.height)
    .bind(data.rotation)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create seat".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: SeatUpdate) -> RepoResult<Seat> {
    let rows = sqlx::query(
        "UPDATE seat SET section = COALESCE(?1, section), seat_number = COALESCE(?2, seat_number), seat_type = COALESCE(?3, seat_type), pos_x = COALESCE(?4, pos_x), pos_y = COALESCE(?5, pos_y), width = COALESCE(?6, width), height = COALESCE(?7, height), rotation = COALESCE(?8, rotation), is_active = COALESCE(?9, is_active) WHERE id = ?10",
    )
    .bind(&data.section)
    .bind(&data.seat_number)
    .bind(&data.seat_type)
    .bind(data.pos_x)
    .bind(data.pos_y)
    .bind(data.width)
    .bind(data.height)
    .bind(data.rotation)
    .bind(data.is_active)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Seat {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Seat {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    // Refuse while future bookings reference the seat
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM booking WHERE seat_id = ? AND booking_date >= date('now')",
    )
    .bind(id)
    .fetch_one(pool)
    .await?;
    if count > 0 {
        return Err(RepoError::Validation(
            "Cannot delete seat with upcoming bookings".into(),
        ));
    }
    sqlx::query("DELETE FROM seat WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(true)
}
