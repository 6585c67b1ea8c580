#![deny(unsafe_code)]
//! # header-theme server
//!
//! Serves the branded header of the banking assistant frontend:
//!
//! - `POST /api/upload-logo`: store a logo and derive the header theme from it
//! - `GET /api/header-style`: the stored (or default) header style
//! - `GET /api/logo`: the stored logo
//! - `GET /api/theme?color=`: preview the theme for any color

pub mod config;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use errors::{AppError, AppResult};
pub use routes::router;
pub use state::AppState;
