//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Argument validation (coordinates, language)
//! - API key loading from the fixed key file
//! - The One Call HTTP client and response parser
//! - The typed forecast model
//! - Pure renderers for the current/hourly/daily views
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod options;
pub mod render;

pub use client::{ForecastClient, parse_forecast};
pub use config::{API_KEY_FILE, load_api_key};
pub use error::ForecastError;
pub use model::ForecastSnapshot;
pub use options::{Coordinates, Options};
pub use render::{render_current, render_daily, render_hourly};
