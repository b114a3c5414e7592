//! Data models
//!
//! Shared between reserve-server and frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).
//! Calendar dates are `chrono::NaiveDate`, stored as `YYYY-MM-DD` TEXT.

pub mod booking;
pub mod exception;
pub mod quarter;
pub mod restriction;
pub mod seat;
pub mod session;
pub mod zone;

// Re-exports
pub use booking::*;
pub use exception::*;
pub use quarter::*;
pub use restriction::*;
pub use seat::*;
pub use session::*;
pub use zone::*;
