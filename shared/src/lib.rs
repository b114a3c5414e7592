//! Shared types for the seat-reservation service
//!
//! Data models and small utilities used by the server and by API clients.
//! DB row derives are feature-gated behind `db` so frontend-facing builds
//! don't pull in sqlx.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
