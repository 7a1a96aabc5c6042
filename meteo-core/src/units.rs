/// Coarse unit preference supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnitPreference {
    #[default]
    Metric,
    Imperial,
}

impl UnitPreference {
    /// Anything other than "imperial" (case-insensitive, trimmed) is metric.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("imperial") {
            UnitPreference::Imperial
        } else {
            UnitPreference::Metric
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitPreference::Metric => "metric",
            UnitPreference::Imperial => "imperial",
        }
    }

    pub fn units(&self) -> UnitSet {
        match self {
            UnitPreference::Metric => UnitSet::METRIC,
            UnitPreference::Imperial => UnitSet::IMPERIAL,
        }
    }
}

impl std::fmt::Display for UnitPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit tokens sent to Open-Meteo and echoed in rendered lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitSet {
    pub temperature_unit: &'static str,
    pub windspeed_unit: &'static str,
    pub precipitation_unit: &'static str,
}

impl UnitSet {
    pub const METRIC: UnitSet = UnitSet {
        temperature_unit: "celsius",
        windspeed_unit: "kmh",
        precipitation_unit: "mm",
    };

    pub const IMPERIAL: UnitSet = UnitSet {
        temperature_unit: "fahrenheit",
        windspeed_unit: "mph",
        precipitation_unit: "inch",
    };

    pub fn resolve(preference: &str) -> UnitSet {
        UnitPreference::parse(preference).units()
    }

    /// Query pairs in the order the forecast endpoint expects them.
    pub fn query_pairs(&self) -> [(&'static str, &'static str); 3] {
        [
            ("temperature_unit", self.temperature_unit),
            ("windspeed_unit", self.windspeed_unit),
            ("precipitation_unit", self.precipitation_unit),
        ]
    }
}
