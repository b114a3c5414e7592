//! Core module: server configuration, state and error definitions
//!
//! - [`Config`]: server configuration
//! - [`ServerState`]: shared application state
//! - [`Server`]: HTTP server
//! - [`ServerError`]: server-level errors

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
