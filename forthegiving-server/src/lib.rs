//! forthegiving-server: HTTP backend for the ForTheGiving donation platform
//!
//! Exposes the hospital directory and donor registration over a small JSON
//! API backed by MySQL.

pub mod db;
pub mod http;
pub mod state;

pub use http::server::{build_router, run_server, ServerConfig};
pub use state::AppState;
