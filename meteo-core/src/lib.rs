//! Core library for the `meteo` CLI.
//!
//! This crate defines:
//! - Unit and language resolution for Open-Meteo requests
//! - Bilingual rendering of forecasts, condition codes and severe-weather alerts
//! - The provider abstraction and its Open-Meteo HTTP client
//! - The `get_forecast` / `get_alerts` operations that tie them together
//!
//! It is used by `meteo-cli`, but can also be reused by other binaries or services.

pub mod alert;
pub mod conditions;
pub mod config;
pub mod error;
pub mod forecast;
pub mod locale;
pub mod model;
pub mod provider;
pub mod service;
pub mod units;

pub use config::Config;
pub use error::FetchError;
pub use locale::LocaleTag;
pub use model::{AlertRequest, ForecastRequest};
pub use provider::{Fetched, MeteoSource, open_meteo::OpenMeteoClient, source_from_config};
pub use service::WeatherService;
pub use units::{UnitPreference, UnitSet};
