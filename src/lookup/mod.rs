//! Date-keyed forecast lookup
//!
//! The process-wide table [`WEATHER_FORECASTS`] is built on first access and
//! never changes afterwards, so [`get_forecast`] can be called from any
//! thread without coordination.

use std::sync::LazyLock;

use chrono::NaiveDate;

use crate::models::Forecast;

pub mod table;

pub use table::ForecastTable;

/// Anything that can answer "what is the forecast for this date?".
pub trait ForecastProvider {
    /// Forecast stored for `date`, or `None` when the date is not known.
    fn forecast(&self, date: &str) -> Option<&Forecast>;
}

/// Built-in forecasts shared by the whole process.
pub static WEATHER_FORECASTS: LazyLock<ForecastTable> = LazyLock::new(ForecastTable::builtin);

/// Forecast for `date` from [`WEATHER_FORECASTS`].
///
/// The date is not validated: an empty or malformed string is simply a key
/// that is not in the table and yields `None`.
#[must_use]
pub fn get_forecast(date: &str) -> Option<&'static Forecast> {
    WEATHER_FORECASTS.get(date)
}

/// Same as [`get_forecast`] for a calendar date, keyed as `YYYY-MM-DD`.
#[must_use]
pub fn get_forecast_on(date: NaiveDate) -> Option<&'static Forecast> {
    get_forecast(&date.format("%Y-%m-%d").to_string())
}
