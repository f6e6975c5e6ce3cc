//! `forecast-lookup` - date-keyed weather forecast lookup
//!
//! This library exposes a process-wide, read-only forecast table and a
//! lookup that returns `None` for dates the table does not cover.

pub mod config;
pub mod error;
pub mod lookup;
pub mod models;
pub mod telemetry;

// Re-export core types for public API
pub use config::ForecastConfig;
pub use error::ForecastError;
pub use lookup::{
    ForecastProvider, ForecastTable, WEATHER_FORECASTS, get_forecast, get_forecast_on,
};
pub use models::Forecast;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, ForecastError>;
