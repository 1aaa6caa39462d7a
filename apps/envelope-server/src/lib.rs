//! Reference HTTP server exercising every `api-envelope` shape.

pub mod api;
pub mod config;
pub mod logging;
pub mod notes;

pub use api::{router, AppState};
pub use config::{AppConfig, CliArgs};
