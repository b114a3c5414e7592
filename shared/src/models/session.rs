//! Session Model
//!
//! A session is a named time-of-day interval during which a seat may be
//! booked ("morning self-study", "evening 1", ...). Sessions belong to
//! exactly one zone. Which weekdays a session runs on is a separate
//! many-to-many table (`operating_day`).

use serde::{Deserialize, Serialize};

/// Session entity
///
/// `start_time`/`end_time` are "HH:MM" time-of-day strings forming a
/// half-open interval; overnight wraparound is not supported.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Session {
    pub id: i64,
    pub zone_id: i64,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub display_order: i64,
    pub is_active: bool,
}

/// Create session payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCreate {
    pub zone_id: i64,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub display_order: Option<i64>,
    /// Weekdays (0 = Sunday .. 6 = Saturday) the session runs on
    #[serde(default)]
    pub weekdays: Vec<u8>,
}

/// Update session payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUpdate {
    pub name: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub display_order: Option<i64>,
    pub is_active: Option<bool>,
}

/// Operating-day rule: enables a session on one weekday (0 = Sunday)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OperatingDay {
    pub id: i64,
    pub session_id: i64,
    pub weekday: i64,
    pub is_active: bool,
}

/// Replace a session's weekday set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatingDaysReplace {
    /// Weekdays (0 = Sunday .. 6 = Saturday)
    pub weekdays: Vec<u8>,
}
