//! Quarter Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Quarter entity: an academic term window
///
/// Dates outside any quarter are never bookable. Both endpoints are
/// inclusive. Quarters are expected non-overlapping but the core does not
/// enforce it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Quarter {
    pub id: i64,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Create quarter payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuarterCreate {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
