//! Normalizes severe-weather notices whose field names differ per region and
//! upstream warning provider.

use serde_json::{Map, Value};

use crate::{
    locale::LocaleTag,
    model::{display_value, is_present},
};

/// A logical alert field: the source keys probed in priority order and the
/// text used when none of them carries a value.
#[derive(Debug, Clone, Copy)]
pub struct AlertField {
    pub keys: &'static [&'static str],
    default_es: &'static str,
    default_en: &'static str,
}

impl AlertField {
    const fn new(
        keys: &'static [&'static str],
        default_es: &'static str,
        default_en: &'static str,
    ) -> Self {
        Self { keys, default_es, default_en }
    }

    /// First present value among `keys`, if any.
    pub fn lookup<'a>(&self, record: &'a Map<String, Value>) -> Option<&'a Value> {
        self.keys.iter().filter_map(|key| record.get(*key)).find(|v| is_present(v))
    }

    pub fn default_text(&self, locale: LocaleTag) -> &'static str {
        match locale {
            LocaleTag::Es => self.default_es,
            LocaleTag::En => self.default_en,
        }
    }

    pub fn read(&self, record: &Map<String, Value>, locale: LocaleTag) -> String {
        self.lookup(record)
            .map(display_value)
            .unwrap_or_else(|| self.default_text(locale).to_string())
    }
}

pub const HEADLINE: AlertField = AlertField::new(&["headline", "event"], "Alerta", "Alert");
pub const SEVERITY: AlertField = AlertField::new(&["severity", "level"], "desconocida", "unknown");
pub const DESCRIPTION: AlertField = AlertField::new(
    &["description", "instruction", "text"],
    "Sin descripción",
    "No description",
);
pub const SENDER: AlertField = AlertField::new(&["sender", "provider"], "N/D", "N/A");
pub const ONSET: AlertField = AlertField::new(&["onset", "effective"], "N/D", "N/A");
pub const EXPIRES: AlertField = AlertField::new(&["expires", "ends"], "N/D", "N/A");

/// Render one alert as a multi-line block ending with `\n`.
pub fn format_alert(record: &Map<String, Value>, locale: LocaleTag) -> String {
    let headline = HEADLINE.read(record, locale);
    let severity = SEVERITY.read(record, locale);
    let description = DESCRIPTION.read(record, locale);
    let sender = SENDER.read(record, locale);
    let onset = ONSET.read(record, locale);
    let expires = EXPIRES.read(record, locale);

    match locale {
        LocaleTag::Es => format!(
            "⚠️ {headline}\n\
             Severidad: {severity}\n\
             Desde: {onset}  Hasta: {expires}\n\
             Fuente: {sender}\n\
             Detalle: {description}\n"
        ),
        LocaleTag::En => format!(
            "⚠️ {headline}\n\
             Severity: {severity}\n\
             From: {onset}  Until: {expires}\n\
             Source: {sender}\n\
             Details: {description}\n"
        ),
    }
}

/// Same as [`format_alert`], but a non-object entry is rendered with all defaults.
pub fn format_alert_value(entry: &Value, locale: LocaleTag) -> String {
    match entry.as_object() {
        Some(record) => format_alert(record, locale),
        None => format_alert(&Map::new(), locale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("test record must be an object")
    }

    #[test]
    fn empty_record_uses_spanish_defaults() {
        let out = format_alert(&Map::new(), LocaleTag::Es);
        assert!(out.contains("Alerta"));
        assert!(out.contains("desconocida"));
        assert!(out.contains("Sin descripción"));
        assert_eq!(out.matches("N/D").count(), 3);
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn empty_record_uses_english_defaults() {
        let out = format_alert(&Map::new(), LocaleTag::En);
        assert_eq!(
            out,
            "⚠️ Alert\nSeverity: unknown\nFrom: N/A  Until: N/A\nSource: N/A\nDetails: No description\n"
        );
    }

    #[test]
    fn headline_wins_over_event() {
        let rec = record(json!({"event": "Wind", "headline": "Storm warning"}));
        let out = format_alert(&rec, LocaleTag::En);
        assert!(out.starts_with("⚠️ Storm warning\n"));
        assert!(!out.contains("Wind"));
    }

    #[test]
    fn alternate_keys_are_used_when_primary_missing() {
        let rec = record(json!({
            "event": "Heat",
            "level": "orange",
            "text": "Stay hydrated",
            "provider": "AEMET",
            "effective": "2024-07-01T10:00",
            "ends": "2024-07-02T20:00",
        }));
        let out = format_alert(&rec, LocaleTag::Es);
        assert_eq!(
            out,
            "⚠️ Heat\n\
             Severidad: orange\n\
             Desde: 2024-07-01T10:00  Hasta: 2024-07-02T20:00\n\
             Fuente: AEMET\n\
             Detalle: Stay hydrated\n"
        );
    }

    #[test]
    fn empty_values_fall_through_to_next_key() {
        let rec = record(json!({"description": "", "instruction": null, "text": "Seek shelter"}));
        assert_eq!(DESCRIPTION.read(&rec, LocaleTag::En), "Seek shelter");
    }

    #[test]
    fn description_priority_order() {
        let rec = record(json!({"text": "c", "instruction": "b", "description": "a"}));
        assert_eq!(DESCRIPTION.read(&rec, LocaleTag::En), "a");
        let rec = record(json!({"text": "c", "instruction": "b"}));
        assert_eq!(DESCRIPTION.read(&rec, LocaleTag::En), "b");
    }

    #[test]
    fn non_string_values_are_rendered() {
        let rec = record(json!({"severity": 3}));
        assert_eq!(SEVERITY.read(&rec, LocaleTag::En), "3");
    }

    #[test]
    fn non_object_entry_gets_defaults() {
        let out = format_alert_value(&json!("garbage"), LocaleTag::En);
        assert!(out.starts_with("⚠️ Alert\n"));
    }
}
