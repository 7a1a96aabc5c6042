use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{CustomType, Select, Text};
use meteo_core::{
    AlertRequest, Config, ForecastRequest, UnitPreference, WeatherService, source_from_config,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "meteo", version, about = "Bilingual Open-Meteo weather lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively set the default units, language and connection settings.
    Configure,

    /// Current conditions and a daily forecast for a coordinate.
    Forecast {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,

        #[arg(allow_negative_numbers = true)]
        longitude: f64,

        /// Days to forecast; values outside 1..=16 are clamped.
        #[arg(
            long,
            default_value_t = meteo_core::model::DEFAULT_DAYS,
            allow_negative_numbers = true
        )]
        days: i64,

        /// "metric" or "imperial"; falls back to the configured default.
        #[arg(long)]
        units: Option<String>,

        /// "es" or "en"; falls back to the configured default.
        #[arg(long)]
        language: Option<String>,
    },

    /// Active severe-weather alerts near a coordinate.
    Alerts {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,

        #[arg(allow_negative_numbers = true)]
        longitude: f64,

        /// "es" or "en"; falls back to the configured default.
        #[arg(long)]
        language: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;

        match self.command {
            Command::Configure => configure(config)?,
            Command::Forecast { latitude, longitude, days, units, language } => {
                let request = ForecastRequest::new(latitude, longitude)
                    .with_days(days)
                    .with_units(units.unwrap_or_else(|| config.default_units.clone()))
                    .with_language(language.unwrap_or_else(|| config.default_language.clone()));

                let service = WeatherService::new(source_from_config(&config)?);
                println!("{}", service.get_forecast(&request).await);
            }
            Command::Alerts { latitude, longitude, language } => {
                let request = AlertRequest::new(latitude, longitude)
                    .with_language(language.unwrap_or_else(|| config.default_language.clone()));

                let service = WeatherService::new(source_from_config(&config)?);
                println!("{}", service.get_alerts(&request).await);
            }
        }

        Ok(())
    }
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let current_units = UnitPreference::parse(&config.default_units);
    let options = vec![UnitPreference::Metric, UnitPreference::Imperial];
    let start = options.iter().position(|u| *u == current_units).unwrap_or(0);

    let units = Select::new("Default units:", options)
        .with_starting_cursor(start)
        .prompt()
        .context("Units selection aborted")?;

    let language = Text::new("Default language (es/en):")
        .with_default(&config.default_language)
        .prompt()
        .context("Language input aborted")?;

    let timeout_secs = CustomType::<u64>::new("Request timeout (seconds):")
        .with_default(config.timeout_secs)
        .with_error_message("Please enter a whole number of seconds")
        .prompt()
        .context("Timeout input aborted")?;

    let base_url = Text::new("Open-Meteo base URL:")
        .with_default(&config.base_url)
        .prompt()
        .context("Base URL input aborted")?;

    config.set_default_units(units);
    config.set_default_language(language.trim());
    config.timeout_secs = timeout_secs;
    config.base_url = base_url.trim().to_string();

    let path = config.save()?;
    tracing::info!(path = %path.display(), "configuration saved");
    println!("Saved configuration to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_accepts_negative_coordinates() {
        let cli =
            Cli::try_parse_from(["meteo", "forecast", "40.4", "-3.7", "--days", "20"]).unwrap();
        match cli.command {
            Command::Forecast { latitude, longitude, days, units, language } => {
                assert_eq!(latitude, 40.4);
                assert_eq!(longitude, -3.7);
                assert_eq!(days, 20);
                assert!(units.is_none());
                assert!(language.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn forecast_days_default_to_three() {
        let cli = Cli::try_parse_from(["meteo", "forecast", "1", "2"]).unwrap();
        assert!(matches!(cli.command, Command::Forecast { days: 3, .. }));
    }

    #[test]
    fn alerts_parse_language() {
        let cli =
            Cli::try_parse_from(["meteo", "alerts", "-33.9", "18.4", "--language", "en"]).unwrap();
        match cli.command {
            Command::Alerts { latitude, language, .. } => {
                assert_eq!(latitude, -33.9);
                assert_eq!(language.as_deref(), Some("en"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
