use serde_json::Value;

use crate::{locale::LocaleTag, units::UnitPreference};

pub const DEFAULT_DAYS: i64 = 3;
pub const MIN_DAYS: i64 = 1;
pub const MAX_DAYS: i64 = 16;

/// Parameters of a forecast lookup, as received from the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// Requested days; clamped to `MIN_DAYS..=MAX_DAYS` before fetching.
    pub days: i64,
    pub units: String,
    pub language: String,
}

impl ForecastRequest {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            days: DEFAULT_DAYS,
            units: UnitPreference::default().to_string(),
            language: LocaleTag::default().to_string(),
        }
    }

    pub fn with_days(mut self, days: i64) -> Self {
        self.days = days;
        self
    }

    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn clamped_days(&self) -> i64 {
        self.days.clamp(MIN_DAYS, MAX_DAYS)
    }
}

/// Parameters of a severe-weather alert lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub language: String,
}

impl AlertRequest {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude, language: LocaleTag::default().to_string() }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// Upstream values count only when non-empty: null, false, 0, "", [] and {} are skipped.
pub(crate) fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Strings print raw; everything else prints as JSON text.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Integer view of a condition code. Floats are truncated toward zero and
/// integer strings are parsed; anything else has no code.
pub(crate) fn as_code(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
