//! Rule evaluators
//!
//! Pure, synchronous decision logic over immutable snapshots of rule data
//! fetched by the API layer. Evaluators never perform I/O and never return
//! errors: missing scheduling data means "not operating / not bookable"
//! (fail closed), missing restriction config means "unrestricted" (fail
//! open).

pub mod access;
pub mod activity;
pub mod calendar;
pub mod window;

pub use access::{AccessDecision, check_access, grade_from_student_id};
pub use activity::{BookingActivity, DayStatus, aggregate_activity};
pub use calendar::CalendarRules;
pub use window::BookingWindow;
