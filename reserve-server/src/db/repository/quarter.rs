//! Quarter Repository

use super::{RepoError, RepoResult};
use shared::models::{Quarter, QuarterCreate};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Quarter>> {
    let quarters = sqlx::query_as::<_, Quarter>(
        "SELECT id, name, start_date, end_date FROM quarter ORDER BY start_date",
    )
    .fetch_all(pool)
    .await?;
    Ok(quarters)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Quarter>> {
    let quarter = sqlx::query_as::<_, Quarter>(
        "SELECT id, name, start_date, end_date FROM quarter WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(quarter)
}

pub async fn create(pool: &SqlitePool, data: QuarterCreate) -> RepoResult<Quarter> {
    if data.end_date < data.start_date {
        return Err(RepoError::Validation(format!(
            "Quarter end {} is before start {}",
            data.end_date, data.start_date
        )));
    }
    let id = shared::util::snowflake_id();
    sqlx::query("INSERT INTO quarter (id, name, start_date, end_date) VALUES (?, ?, ?, ?)")
        .bind(id)
        .bind(&data.name)
        .bind(data.start_date)
        .bind(data.end_date)
        .execute(pool)
        .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create quarter".into()))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM quarter WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Quarter {id} not found")));
    }
    Ok(true)
}
