//! Reserve Server: seat-reservation backend for study zones
//!
//! # Module structure
//!
//! ```text
//! reserve-server/src/
//! ├── core/     # Config, state, HTTP server, errors
//! ├── db/       # SQLite pool, migrations, repositories
//! ├── rules/    # Pure evaluators: calendar, window, access, activity
//! ├── booking/  # Atomic booking transaction coordinator
//! ├── wizard/   # Booking wizard step state machine
//! ├── api/      # HTTP routes and handlers
//! └── utils/    # Errors, logging, time helpers
//! ```
//!
//! Rule evaluation is pure and synchronous over snapshots fetched up
//! front; the only blocking operations are database calls, and the only
//! multi-row mutation is the booking transaction in [`booking`].

pub mod api;
pub mod booking;
pub mod core;
pub mod db;
pub mod rules;
pub mod utils;
pub mod wizard;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;
