//! # Xerxes API
//!
//! HTTP surface of the Xerxes backend: phone verification, bearer token
//! login and per-user receipts, served with actix-web.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::create_app;
pub use routes::AppState;
