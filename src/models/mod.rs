//! Data models for forecast lookup
//!
//! - Forecast: the opaque value stored against a date key

pub mod forecast;

pub use forecast::Forecast;
