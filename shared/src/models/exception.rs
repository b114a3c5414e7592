//! Calendar Exception Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar exception: overrides normal operation for one date in a zone
/// (holiday, closure day)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CalendarException {
    pub id: i64,
    pub zone_id: i64,
    pub exception_date: NaiveDate,
    pub is_closed: bool,
    pub note: Option<String>,
}

/// Create calendar exception payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarExceptionCreate {
    pub exception_date: NaiveDate,
    #[serde(default = "default_true")]
    pub is_closed: bool,
    pub note: Option<String>,
}

fn default_true() -> bool {
    true
}
