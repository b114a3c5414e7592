//! App Config Repository
//!
//! Key/value configuration rows. The grade-restriction document lives
//! under `grade_restriction` as JSON; a missing or unparsable row yields
//! the permissive default config.

use super::RepoResult;
use shared::models::RestrictionConfig;
use sqlx::SqlitePool;

pub const GRADE_RESTRICTION_KEY: &str = "grade_restriction";

pub async fn get(pool: &SqlitePool, key: &str) -> RepoResult<Option<String>> {
    let value: Option<String> = sqlx::query_scalar("SELECT value FROM app_config WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await?;
    Ok(value)
}

pub async fn set(pool: &SqlitePool, key: &str, value: &str) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO app_config (key, value) VALUES (?1, ?2) ON CONFLICT(key) DO UPDATE SET value = ?2",
    )
    .bind(key)
    .bind(value)
    .execute(pool)
    .await?;
    Ok(())
}

/// Load the grade-restriction config, defaulting to unrestricted
pub async fn get_restriction_config(pool: &SqlitePool) -> RepoResult<RestrictionConfig> {
    let raw = get(pool, GRADE_RESTRICTION_KEY).await?;
    let config = raw
        .as_deref()
        .and_then(|v| {
            serde_json::from_str(v)
                .inspect_err(|e| {
                    tracing::warn!("Unparsable {GRADE_RESTRICTION_KEY} config: {e}");
                })
                .ok()
        })
        .unwrap_or_default();
    Ok(config)
}

pub async fn set_restriction_config(
    pool: &SqlitePool,
    config: &RestrictionConfig,
) -> RepoResult<()> {
    let value = serde_json::to_string(config)
        .map_err(|e| super::RepoError::Validation(format!("Unserializable config: {e}")))?;
    set(pool, GRADE_RESTRICTION_KEY, &value).await
}
