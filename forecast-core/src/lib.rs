//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Fetching the raw forecast document (`source`)
//! - Parsing and projecting it into flat records (`parse`, `project`)
//! - CSV and JSON export (`export`)
//! - Configuration handling and the typed error taxonomy
//!
//! [`pipeline::run`] ties the stages together.

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod parse;
pub mod pipeline;
pub mod project;
pub mod source;

pub use config::{Config, HttpSettings};
pub use error::{ErrorKind, ForecastError};
pub use export::OutputPaths;
pub use model::{ForecastRecord, RawForecastEntry};
pub use pipeline::{RunSummary, run};
pub use source::{FORECAST_URL, ForecastSource, HttpForecastSource, StaticSource};
