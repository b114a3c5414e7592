//! Calendar Exception API module

mod handler;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/zones/{zone_id}/exceptions",
            get(handler::list_by_zone).post(handler::create),
        )
        .route("/api/exceptions/{id}", delete(handler::delete))
}
