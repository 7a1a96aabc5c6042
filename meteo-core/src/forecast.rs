//! Text rendering of the Open-Meteo `current` and `daily` blocks.

use serde_json::{Map, Value};

use crate::{
    conditions::translate,
    locale::LocaleTag,
    model::{as_code, display_value},
    units::UnitSet,
};

pub const DAILY_TIME: &str = "time";
pub const DAILY_TEMP_MAX: &str = "temperature_2m_max";
pub const DAILY_TEMP_MIN: &str = "temperature_2m_min";
pub const DAILY_PRECIPITATION: &str = "precipitation_sum";
pub const DAILY_WIND_MAX: &str = "windspeed_10m_max";
pub const DAILY_CODE: &str = "weathercode";

pub const CURRENT_TEMP: &str = "temperature_2m";
pub const CURRENT_WIND: &str = "windspeed_10m";
pub const CURRENT_CODE: &str = "weathercode";

/// Daily variables requested from the forecast endpoint.
pub const DAILY_FIELDS: [&str; 5] =
    [DAILY_TEMP_MAX, DAILY_TEMP_MIN, DAILY_PRECIPITATION, DAILY_WIND_MAX, DAILY_CODE];

/// Current variables requested from the forecast endpoint.
pub const CURRENT_FIELDS: [&str; 3] = [CURRENT_TEMP, CURRENT_WIND, CURRENT_CODE];

/// One aligned row across the daily sequences.
#[derive(Debug, Clone, Copy)]
pub struct ForecastDay<'a> {
    pub date: &'a Value,
    pub temp_max: &'a Value,
    pub temp_min: &'a Value,
    pub precipitation: &'a Value,
    pub wind_max: &'a Value,
    pub code: i64,
}

/// Per-field daily sequences; a missing or non-array field is an empty sequence.
#[derive(Debug, Default)]
pub struct DailySeries<'a> {
    time: &'a [Value],
    temp_max: &'a [Value],
    temp_min: &'a [Value],
    precipitation: &'a [Value],
    wind_max: &'a [Value],
    code: &'a [Value],
}

fn sequence<'a>(daily: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    daily.get(key).and_then(Value::as_array).map(Vec::as_slice).unwrap_or_default()
}

impl<'a> DailySeries<'a> {
    pub fn from_map(daily: &'a Map<String, Value>) -> Self {
        Self {
            time: sequence(daily, DAILY_TIME),
            temp_max: sequence(daily, DAILY_TEMP_MAX),
            temp_min: sequence(daily, DAILY_TEMP_MIN),
            precipitation: sequence(daily, DAILY_PRECIPITATION),
            wind_max: sequence(daily, DAILY_WIND_MAX),
            code: sequence(daily, DAILY_CODE),
        }
    }

    /// Number of indices present in every sequence.
    pub fn aligned_len(&self) -> usize {
        [
            self.time.len(),
            self.temp_max.len(),
            self.temp_min.len(),
            self.precipitation.len(),
            self.wind_max.len(),
            self.code.len(),
        ]
        .into_iter()
        .min()
        .unwrap_or(0)
    }

    /// Row `index`, or `None` when it is out of range or its code is unreadable.
    pub fn day(&self, index: usize) -> Option<ForecastDay<'a>> {
        Some(ForecastDay {
            date: self.time.get(index)?,
            temp_max: self.temp_max.get(index)?,
            temp_min: self.temp_min.get(index)?,
            precipitation: self.precipitation.get(index)?,
            wind_max: self.wind_max.get(index)?,
            code: as_code(self.code.get(index)?)?,
        })
    }

    /// Renderable rows, stopping at the shortest sequence.
    pub fn days(&self) -> impl Iterator<Item = ForecastDay<'a>> + '_ {
        (0..self.aligned_len()).filter_map(move |i| self.day(i))
    }
}

fn value_or_na(value: Option<&Value>, locale: LocaleTag) -> String {
    match value {
        Some(v) if !v.is_null() => display_value(v),
        _ => locale.not_available().to_string(),
    }
}

fn current_line(current: &Map<String, Value>, units: UnitSet, locale: LocaleTag) -> String {
    let temp = value_or_na(current.get(CURRENT_TEMP), locale);
    let wind = value_or_na(current.get(CURRENT_WIND), locale);
    let sky = match current.get(CURRENT_CODE).and_then(as_code) {
        Some(code) => translate(code, locale).into_owned(),
        None => locale.not_available().to_string(),
    };
    let wind_unit = units.windspeed_unit;

    match locale {
        LocaleTag::Es => format!("Ahora: {temp}° | Viento: {wind} {wind_unit} | Cielo: {sky}"),
        LocaleTag::En => format!("Now: {temp}° | Wind: {wind} {wind_unit} | Sky: {sky}"),
    }
}

fn day_line(day: &ForecastDay<'_>, units: UnitSet, locale: LocaleTag) -> String {
    let date = display_value(day.date);
    let max = display_value(day.temp_max);
    let min = display_value(day.temp_min);
    let rain = display_value(day.precipitation);
    let wind = display_value(day.wind_max);
    let sky = translate(day.code, locale);
    let precip_unit = units.precipitation_unit;
    let wind_unit = units.windspeed_unit;

    match locale {
        LocaleTag::Es => format!(
            "{date}: máx {max}°, mín {min}°, lluvia {rain} {precip_unit}, \
             viento máx {wind} {wind_unit}, {sky}"
        ),
        LocaleTag::En => format!(
            "{date}: max {max}°, min {min}°, rain {rain} {precip_unit}, \
             max wind {wind} {wind_unit}, {sky}"
        ),
    }
}

/// Line buffer behind [`render`]: optional "now" line, an empty separator,
/// then one line per aligned day.
pub fn render_lines(
    current: Option<&Map<String, Value>>,
    daily: Option<&Map<String, Value>>,
    units: UnitSet,
    locale: LocaleTag,
) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(current) = current.filter(|c| !c.is_empty()) {
        lines.push(current_line(current, units, locale));
    }

    lines.push(String::new());

    let series = daily.map(DailySeries::from_map).unwrap_or_default();
    lines.extend(series.days().map(|day| day_line(&day, units, locale)));

    lines
}

pub fn render(
    current: Option<&Map<String, Value>>,
    daily: Option<&Map<String, Value>>,
    units: UnitSet,
    locale: LocaleTag,
) -> String {
    render_lines(current, daily, units, locale).join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("test value must be an object")
    }

    fn full_daily() -> Map<String, Value> {
        obj(json!({
            "time": ["2024-05-01", "2024-05-02", "2024-05-03"],
            "temperature_2m_max": [21.4, 19.0, 23.1],
            "temperature_2m_min": [10.2, 9.8, 12.0],
            "precipitation_sum": [0.0, 4.5, 0.2],
            "windspeed_10m_max": [15.3, 22.0, 9.1],
            "weathercode": [0, 63, 2],
        }))
    }

    #[test]
    fn renders_current_and_days_in_spanish() {
        let current = obj(json!({"temperature_2m": 18.5, "windspeed_10m": 7.2, "weathercode": 1}));
        let daily = full_daily();
        let out = render(Some(&current), Some(&daily), UnitSet::METRIC, LocaleTag::Es);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Ahora: 18.5° | Viento: 7.2 kmh | Cielo: Mayormente despejado");
        assert_eq!(lines[1], "");
        assert_eq!(
            lines[3],
            "2024-05-02: máx 19.0°, mín 9.8°, lluvia 4.5 mm, viento máx 22.0 kmh, Lluvia moderada"
        );
    }

    #[test]
    fn renders_english_with_imperial_units() {
        let current = obj(json!({"temperature_2m": 64, "windspeed_10m": 5, "weathercode": 3}));
        let daily = full_daily();
        let out = render(Some(&current), Some(&daily), UnitSet::IMPERIAL, LocaleTag::En);

        assert!(out.starts_with("Now: 64° | Wind: 5 mph | Sky: Overcast\n\n"));
        assert!(out.contains(
            "2024-05-01: max 21.4°, min 10.2°, rain 0.0 inch, max wind 15.3 mph, Clear"
        ));
    }

    #[test]
    fn short_sequence_drops_trailing_days() {
        let daily = obj(json!({
            "time": ["d0", "d1", "d2"],
            "temperature_2m_max": [10, 20],
            "temperature_2m_min": [1, 2, 3],
            "precipitation_sum": [0, 0, 0],
            "windspeed_10m_max": [5, 5, 5],
            "weathercode": [0, 0, 0],
        }));
        let out = render(None, Some(&daily), UnitSet::METRIC, LocaleTag::En);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("d0:"));
        assert!(lines[1].starts_with("d1:"));
    }

    #[test]
    fn empty_current_has_no_now_line_but_keeps_separator() {
        let current = Map::new();
        let daily = full_daily();
        let lines = render_lines(Some(&current), Some(&daily), UnitSet::METRIC, LocaleTag::Es);

        assert!(lines.iter().all(|l| !l.starts_with("Ahora:") && !l.starts_with("Now:")));
        assert_eq!(lines[0], "");
        assert_eq!(lines.len(), 4);

        let out = render(Some(&current), Some(&daily), UnitSet::METRIC, LocaleTag::Es);
        assert!(out.starts_with("2024-05-01:"));
    }

    #[test]
    fn non_integer_code_skips_only_that_day() {
        let mut daily = full_daily();
        daily.insert("weathercode".into(), json!([0, null, 2]));
        let out = render(None, Some(&daily), UnitSet::METRIC, LocaleTag::En);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("2024-05-03:"));
    }

    #[test]
    fn missing_daily_yields_only_current() {
        let current = obj(json!({"temperature_2m": 3.0, "windspeed_10m": 1.0, "weathercode": 71}));
        let out = render(Some(&current), None, UnitSet::METRIC, LocaleTag::Es);
        assert_eq!(out, "Ahora: 3.0° | Viento: 1.0 kmh | Cielo: Nevadas ligeras");
    }

    #[test]
    fn current_with_missing_values_uses_placeholders() {
        let current = obj(json!({"temperature_2m": null}));
        let out = render(Some(&current), None, UnitSet::METRIC, LocaleTag::En);
        assert_eq!(out, "Now: N/A° | Wind: N/A kmh | Sky: N/A");
    }

    #[test]
    fn fractional_and_string_codes_still_render() {
        let mut daily = full_daily();
        daily.insert("weathercode".into(), json!([0.9, "63", 2]));
        let out = render(None, Some(&daily), UnitSet::METRIC, LocaleTag::En);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with(", Clear"));
        assert!(lines[1].ends_with(", Moderate rain"));
    }

    #[test]
    fn unknown_day_code_uses_fallback_text() {
        let mut daily = full_daily();
        daily.insert("weathercode".into(), json!([0, 63, 42]));
        let out = render(None, Some(&daily), UnitSet::METRIC, LocaleTag::Es);
        assert!(out.ends_with("Código 42"));
    }

    #[test]
    fn nothing_at_all_renders_empty() {
        assert_eq!(render(None, None, UnitSet::METRIC, LocaleTag::Es), "");
    }
}
