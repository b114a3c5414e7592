//! Booking and Attendance Models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Booking entity: one seat, one session, one date, one subject
///
/// `student_id` is the subject of the booking. `user_id` is the account
/// that created it: the student's linked account for self-service (absent
/// for unlinked students), or the acting staff account when booked on a
/// student's behalf.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Booking {
    pub id: i64,
    pub booking_date: NaiveDate,
    pub seat_id: i64,
    pub session_id: i64,
    pub user_id: Option<String>,
    pub student_id: String,
    pub created_at: i64,
}

/// Attendance status: written by an external attendance-taking process.
/// Absence carries no record; it is inferred for past dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type), sqlx(rename_all = "UPPERCASE"))]
pub enum AttendanceStatus {
    #[serde(rename = "PRESENT")]
    Present,
    #[serde(rename = "LATE")]
    Late,
}

/// Attendance record: 0-or-1 per booking
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Attendance {
    pub id: i64,
    pub booking_id: i64,
    pub status: AttendanceStatus,
    pub recorded_at: i64,
}

/// Booking joined with its optional attendance and study content
/// (occupancy / history views)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct BookingDetail {
    pub id: i64,
    pub booking_date: NaiveDate,
    pub seat_id: i64,
    pub session_id: i64,
    pub user_id: Option<String>,
    pub student_id: String,
    pub created_at: i64,
    pub section: String,
    pub seat_number: String,
    pub session_name: String,
    pub attendance_status: Option<AttendanceStatus>,
    pub content: Option<String>,
}
