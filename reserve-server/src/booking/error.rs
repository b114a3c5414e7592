//! Booking error types

use thiserror::Error;

use crate::utils::AppError;

/// Failure modes of the booking coordinator
#[derive(Debug, Error)]
pub enum BookingError {
    /// Client-side seat resolution failed: no seat in the zone matches
    /// the requested section + number
    #[error("No seat '{seat_number}' in section '{section}'")]
    SeatNotFound {
        section: String,
        seat_number: String,
    },

    /// Another actor already holds that seat+session+date
    #[error("Seat already booked: {0}")]
    Conflict(String),

    /// Missing or inconsistent request data
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The store is unreachable or failed; surfaced, never auto-retried
    #[error("Store error: {0}")]
    Store(String),
}

impl From<sqlx::Error> for BookingError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err
            && db.is_unique_violation()
        {
            return BookingError::Conflict(
                "that seat and session are already booked for this date".into(),
            );
        }
        BookingError::Store(err.to_string())
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::SeatNotFound { .. } => AppError::NotFound(err.to_string()),
            BookingError::Conflict(msg) => AppError::Conflict(msg),
            BookingError::Validation(msg) => AppError::Validation(msg),
            BookingError::Store(msg) => AppError::Database(msg),
        }
    }
}
