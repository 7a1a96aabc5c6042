use crate::{Config, error::FetchError, provider::open_meteo::OpenMeteoClient};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fmt::Debug;

pub mod open_meteo;

/// Outcome of a single provider call.
#[derive(Debug)]
pub enum Fetched {
    /// Parsed top-level JSON object.
    Success(Map<String, Value>),
    Failure(FetchError),
}

/// Query string as ordered key/value pairs.
pub type Query = Vec<(String, String)>;

/// One GET against the weather provider. Implementations never error out;
/// every failure is reported as [`Fetched::Failure`].
#[async_trait]
pub trait MeteoSource: Send + Sync + Debug {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Fetched;
}

/// Construct the Open-Meteo client described by `config`.
pub fn source_from_config(config: &Config) -> anyhow::Result<Box<dyn MeteoSource>> {
    let client = OpenMeteoClient::new(config.base_url.clone(), config.timeout())?;
    Ok(Box::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_from_default_config_builds() {
        let cfg = Config::default();
        assert!(source_from_config(&cfg).is_ok());
    }
}
