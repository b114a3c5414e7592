//! Booking transaction coordinator
//!
//! Assembles a set of (date, seat, session, content) tuples and commits
//! them as one atomic unit, replacing a prior set when editing. Atomicity
//! is delegated to a single SQLite transaction: no client-side locking;
//! concurrent bookers race on the `(booking_date, seat_id, session_id)`
//! uniqueness constraint and the loser surfaces [`BookingError::Conflict`].

pub mod coordinator;
pub mod error;
pub mod resolve;

pub use coordinator::{BookingRequest, BookingSubject, SubmitOutcome, cancel, submit};
pub use error::BookingError;
pub use resolve::{normalize_seat_number, resolve_seat};
