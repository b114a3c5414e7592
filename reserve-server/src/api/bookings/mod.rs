//! Booking API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/bookings", get(handler::occupancy).post(handler::submit))
        .route("/api/bookings/user/{student_id}", get(handler::list_by_student))
        .route("/api/bookings/cancel", post(handler::cancel))
}
