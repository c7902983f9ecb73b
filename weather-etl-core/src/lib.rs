//! Core library for the `weather-etl` job.
//!
//! This crate defines:
//! - Configuration, credentials and the retry policy
//! - The weather source abstraction and the OpenWeather client (extract)
//! - Flattening raw readings into records (transform)
//! - The `weather_data` table on PostgreSQL or SQLite (load)
//! - The pipeline tying the three steps together
//!
//! It is used by the `weather-etl` binary, but can also be driven directly
//! from tests or other services.

pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod provider;
pub mod report;
pub mod store;
pub mod transform;

pub use config::{Config, RetryPolicy};
pub use error::{EtlError, EtlResult};
pub use model::{CityReading, WeatherRecord};
pub use pipeline::{Pipeline, RunSummary};
pub use provider::{WeatherSource, openweather::OpenWeatherSource};
pub use report::CityReport;
pub use reqwest::StatusCode;
pub use store::{StoreKind, WeatherStore};
