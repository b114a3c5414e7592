//! Calendar View API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/zones/{zone_id}/calendar", get(handler::range_view))
}
