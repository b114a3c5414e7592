//! API route modules
//!
//! One module per resource, each exposing `router()`:
//!
//! - [`health`]: health check
//! - [`zones`]: zone admin + per-zone seat/session listings
//! - [`seats`]: seat admin
//! - [`sessions`]: session admin + operating-day rules
//! - [`quarters`]: term windows
//! - [`exceptions`]: per-zone calendar overrides
//! - [`restrictions`]: grade restriction config
//! - [`calendar`]: per-day operating/bookable view
//! - [`bookings`]: occupancy reads, submit, cancel
//! - [`activity`]: per-student day-status aggregation

pub mod activity;
pub mod bookings;
pub mod calendar;
pub mod exceptions;
pub mod health;
pub mod quarters;
pub mod restrictions;
pub mod seats;
pub mod sessions;
pub mod zones;

// Re-export common types for handlers
pub use crate::utils::AppResult;
