//! Immutable date-keyed forecast table

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::path::Path;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use tracing::{debug, info};

use super::ForecastProvider;
use crate::error::ForecastError;
use crate::models::Forecast;

/// Forecasts shipped with the crate, keyed by ISO-8601 date.
const BUILTIN_FORECASTS: &[(&str, &str)] = &[
    ("2020-01-01", "Sunny"),
    ("2020-01-03", "Partly cloudy"),
    ("2020-01-04", "Rain"),
    ("2020-01-06", "Snow showers"),
];

/// Read-only mapping from date key to forecast.
///
/// Keys are unique. There is no mutation API: a table is built once and
/// only read afterwards, so shared references are safe across threads.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ForecastTable {
    entries: BTreeMap<String, Forecast>,
}

impl ForecastTable {
    /// The table compiled into the crate
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_FORECASTS
                .iter()
                .map(|(date, forecast)| ((*date).to_string(), Forecast::from(*forecast)))
                .collect(),
        }
    }

    /// Build a table from `(date, forecast)` pairs.
    ///
    /// # Errors
    /// Returns a validation error if the same date appears twice.
    pub fn from_entries<I, K, V>(entries: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Forecast>,
    {
        let mut map: BTreeMap<String, Forecast> = BTreeMap::new();
        for (date, forecast) in entries {
            match map.entry(date.into()) {
                Entry::Vacant(slot) => {
                    slot.insert(forecast.into());
                }
                Entry::Occupied(slot) => {
                    return Err(ForecastError::validation(format!(
                        "duplicate forecast date '{}'",
                        slot.key()
                    )));
                }
            }
        }
        Ok(Self { entries: map })
    }

    /// Parse a JSON object of the form `{"2020-01-01": "Sunny", ...}`.
    ///
    /// # Errors
    /// Returns a parse error for malformed JSON and a validation error when
    /// the object repeats a date.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let document: TableDocument = serde_json::from_str(json)?;
        Self::from_entries(document.0)
    }

    /// Read and parse a JSON table file.
    ///
    /// # Errors
    /// Propagates I/O failures and the errors of [`Self::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let table = Self::from_json_str(&contents)?;
        info!("Loaded {} forecasts from {}", table.len(), path.display());
        Ok(table)
    }

    /// Look up the forecast for `date`. Missing dates yield `None`.
    #[must_use]
    pub fn get(&self, date: &str) -> Option<&Forecast> {
        let found = self.entries.get(date);
        debug!(date, hit = found.is_some(), "forecast lookup");
        found
    }

    #[must_use]
    pub fn contains(&self, date: &str) -> bool {
        self.entries.contains_key(date)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending date order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Forecast)> {
        self.entries.iter().map(|(date, forecast)| (date.as_str(), forecast))
    }

    /// Date keys in ascending order
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl ForecastProvider for ForecastTable {
    fn forecast(&self, date: &str) -> Option<&Forecast> {
        self.get(date)
    }
}

/// JSON object kept as raw pairs so repeated keys can be reported instead
/// of silently overwritten.
struct TableDocument(Vec<(String, Forecast)>);

impl<'de> Deserialize<'de> for TableDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = TableDocument;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object mapping dates to forecasts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((date, forecast)) = map.next_entry::<String, Forecast>()? {
                    pairs.push((date, forecast));
                }
                Ok(TableDocument(pairs))
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_dates_are_unique() {
        let unique: HashSet<_> = BUILTIN_FORECASTS.iter().map(|(date, _)| *date).collect();
        assert_eq!(unique.len(), BUILTIN_FORECASTS.len());
        assert_eq!(ForecastTable::builtin().len(), BUILTIN_FORECASTS.len());
    }

    #[test]
    fn test_builtin_does_not_cover_2020_01_02() {
        let table = ForecastTable::builtin();
        assert!(table.contains("2020-01-01"));
        assert!(!table.contains("2020-01-02"));
    }

    #[test]
    fn test_from_entries_rejects_duplicate_dates() {
        let result = ForecastTable::from_entries([
            ("2021-06-01", "Sunny"),
            ("2021-06-02", "Rain"),
            ("2021-06-01", "Fog"),
        ]);
        let err = result.unwrap_err();
        assert!(matches!(err, ForecastError::Validation { .. }));
        assert!(err.to_string().contains("2021-06-01"));
    }

    #[test]
    fn test_from_entries_empty_table() {
        let table = ForecastTable::from_entries(Vec::<(String, Forecast)>::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.get("2020-01-01"), None);
    }

    #[test]
    fn test_iteration_is_in_date_order() {
        let table = ForecastTable::from_entries([
            ("2022-03-05", "Windy"),
            ("2022-03-01", "Clear"),
            ("2022-03-03", "Drizzle"),
        ])
        .unwrap();
        let dates: Vec<_> = table.dates().collect();
        assert_eq!(dates, vec!["2022-03-01", "2022-03-03", "2022-03-05"]);

        let (first_date, first) = table.iter().next().unwrap();
        assert_eq!(first_date, "2022-03-01");
        assert_eq!(first.as_str(), "Clear");
    }

    #[test]
    fn test_from_json_str() {
        let table =
            ForecastTable::from_json_str(r#"{"2023-07-14": "Thunderstorms", "2023-07-15": "Hot"}"#)
                .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("2023-07-14"), Some(&Forecast::new("Thunderstorms")));
    }

    #[test]
    fn test_from_json_str_rejects_repeated_key() {
        let err = ForecastTable::from_json_str(r#"{"2023-07-14": "Hot", "2023-07-14": "Cold"}"#)
            .unwrap_err();
        assert!(matches!(err, ForecastError::Validation { .. }));
    }

    #[rstest]
    #[case::truncated("{\"2023-07-14\": ")]
    #[case::array("[\"Sunny\"]")]
    #[case::non_string_value("{\"2023-07-14\": 21}")]
    fn test_from_json_str_rejects_malformed(#[case] json: &str) {
        let err = ForecastTable::from_json_str(json).unwrap_err();
        assert!(matches!(err, ForecastError::Parse { .. }));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("forecast-lookup-does-not-exist.json");
        let err = ForecastTable::load(&path).unwrap_err();
        assert!(matches!(err, ForecastError::Io { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "forecast-lookup-table-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"2024-02-29": "Leap day sunshine"}"#).unwrap();

        let table = ForecastTable::load(&path);
        std::fs::remove_file(&path).unwrap();

        let table = table.unwrap();
        assert_eq!(table.get("2024-02-29").unwrap().as_str(), "Leap day sunshine");
    }
}
