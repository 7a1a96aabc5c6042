//! The two user-facing operations. Every path, including provider failures,
//! ends in a displayable string.

use serde_json::{Map, Value};

use crate::{
    alert::format_alert_value,
    forecast::{self, CURRENT_FIELDS, DAILY_FIELDS},
    locale::LocaleTag,
    model::{AlertRequest, ForecastRequest, is_present},
    provider::{Fetched, MeteoSource, Query},
    units::UnitSet,
};

pub const FORECAST_PATH: &str = "forecast";
pub const WARNINGS_PATH: &str = "warnings";

pub const FORECAST_UNAVAILABLE: &str = "No pude obtener el pronóstico de Open-Meteo.";
pub const ALERTS_UNAVAILABLE: &str =
    "No pude obtener alertas (o el servicio no tiene cobertura para esta ubicación).";
pub const NO_ACTIVE_ALERTS: &str = "Sin alertas activas para estas coordenadas.";

/// Top-level keys under which warning providers return their alert list.
pub const ALERT_COLLECTION_KEYS: [&str; 3] = ["warnings", "events", "alerts"];

pub const ALERT_SEPARATOR: &str = "\n---\n";

fn base_query(latitude: f64, longitude: f64) -> Query {
    vec![
        ("latitude".to_string(), latitude.to_string()),
        ("longitude".to_string(), longitude.to_string()),
        ("timezone".to_string(), "auto".to_string()),
    ]
}

/// Query for the forecast endpoint, with the day count already clamped.
pub fn forecast_query(request: &ForecastRequest, units: UnitSet) -> Query {
    let mut query = base_query(request.latitude, request.longitude);
    query.push(("forecast_days".to_string(), request.clamped_days().to_string()));
    query.push(("daily".to_string(), DAILY_FIELDS.join(",")));
    query.push(("current".to_string(), CURRENT_FIELDS.join(",")));
    query.extend(units.query_pairs().into_iter().map(|(k, v)| (k.to_string(), v.to_string())));
    query
}

pub fn alerts_query(request: &AlertRequest) -> Query {
    base_query(request.latitude, request.longitude)
}

/// First non-empty alert list under any of [`ALERT_COLLECTION_KEYS`].
pub fn alert_entries(data: &Map<String, Value>) -> Option<&[Value]> {
    ALERT_COLLECTION_KEYS
        .iter()
        .filter_map(|key| data.get(*key))
        .filter(|value| is_present(value))
        .find_map(|value| value.as_array().map(Vec::as_slice))
}

#[derive(Debug)]
pub struct WeatherService {
    source: Box<dyn MeteoSource>,
}

impl WeatherService {
    pub fn new(source: Box<dyn MeteoSource>) -> Self {
        Self { source }
    }

    pub async fn get_forecast(&self, request: &ForecastRequest) -> String {
        let units = UnitSet::resolve(&request.units);
        let locale = LocaleTag::from_language(&request.language);
        let query = forecast_query(request, units);

        let data = match self.source.get(FORECAST_PATH, &query).await {
            Fetched::Success(data) if !data.is_empty() => data,
            Fetched::Success(_) => {
                tracing::debug!("forecast response was empty");
                return FORECAST_UNAVAILABLE.to_string();
            }
            Fetched::Failure(err) => {
                tracing::debug!(error = %err, "forecast unavailable");
                return FORECAST_UNAVAILABLE.to_string();
            }
        };

        let current = data.get("current").and_then(Value::as_object);
        let daily = data.get("daily").and_then(Value::as_object);
        forecast::render(current, daily, units, locale)
    }

    pub async fn get_alerts(&self, request: &AlertRequest) -> String {
        let locale = LocaleTag::from_language(&request.language);
        let query = alerts_query(request);

        let data = match self.source.get(WARNINGS_PATH, &query).await {
            Fetched::Success(data) if !data.is_empty() => data,
            Fetched::Success(_) => {
                tracing::debug!("alerts response was empty");
                return ALERTS_UNAVAILABLE.to_string();
            }
            Fetched::Failure(err) => {
                tracing::debug!(error = %err, "alerts unavailable");
                return ALERTS_UNAVAILABLE.to_string();
            }
        };

        let Some(entries) = alert_entries(&data) else {
            return NO_ACTIVE_ALERTS.to_string();
        };

        tracing::info!(count = entries.len(), "active alerts");
        entries
            .iter()
            .map(|entry| format_alert_value(entry, locale))
            .collect::<Vec<_>>()
            .join(ALERT_SEPARATOR)
    }
}
