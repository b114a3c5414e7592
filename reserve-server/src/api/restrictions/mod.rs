//! Grade Restriction API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/restrictions",
        get(handler::get_config).put(handler::put_config),
    )
}
