//! # starkcord-api
//!
//! HTTP server built with Axum: the Discord interaction webhook and the
//! token-gated analytics page.

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;
pub mod views;

pub use server::{create_app, create_app_state, run, run_server};
