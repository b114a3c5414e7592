//! Utility module: shared helpers and types
//!
//! - [`AppError`]: application error type (axum `IntoResponse`)
//! - [`AppResult`]: handler result alias
//! - logging and time helpers

pub mod error;
pub mod logger;
pub mod result;
pub mod time;

pub use error::AppError;
pub use result::AppResult;
