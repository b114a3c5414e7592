//! Seat Model

use serde::{Deserialize, Serialize};

/// Seat type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type), sqlx(rename_all = "UPPERCASE"))]
pub enum SeatType {
    /// Bookable seat
    #[serde(rename = "NORMAL")]
    Normal,
    /// Structural placeholder (pillar, aisle marker): rendered, never booked
    #[serde(rename = "PLACEHOLDER")]
    Placeholder,
}

impl Default for SeatType {
    fn default() -> Self {
        Self::Normal
    }
}

/// Seat entity
///
/// `seat_number` is the raw label and may embed the section prefix
/// (e.g. "A-12"); matching against user selections goes through
/// normalization in the booking module. Geometry columns are pass-through
/// data for the canvas renderer; the core never interprets them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Seat {
    pub id: i64,
    pub zone_id: i64,
    /// Sub-zone label ("section")
    pub section: String,
    pub seat_number: String,
    pub seat_type: SeatType,
    pub pos_x: f64,
    pub pos_y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub is_active: bool,
}

/// Create seat payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatCreate {
    pub zone_id: i64,
    pub section: String,
    pub seat_number: String,
    #[serde(default)]
    pub seat_type: SeatType,
    #[serde(default)]
    pub pos_x: f64,
    #[serde(default)]
    pub pos_y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
}

/// Update seat payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatUpdate {
    pub section: Option<String>,
    pub seat_number: Option<String>,
    pub seat_type: Option<SeatType>,
    pub pos_x: Option<f64>,
    pub pos_y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
    pub is_active: Option<bool>,
}
