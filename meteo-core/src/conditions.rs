//! WMO weather codes as reported by Open-Meteo, translated to short text.
//!
//! See <https://open-meteo.com/en/docs> (section "Weather variable documentation").

use std::{borrow::Cow, collections::HashMap, sync::LazyLock};

use crate::locale::LocaleTag;

const SPANISH: &[(i64, &str)] = &[
    (0, "Despejado"),
    (1, "Mayormente despejado"),
    (2, "Parcialmente nublado"),
    (3, "Nublado"),
    (45, "Niebla"),
    (48, "Niebla con escarcha"),
    (51, "Llovizna ligera"),
    (53, "Llovizna moderada"),
    (55, "Llovizna intensa"),
    (56, "Llovizna congelante ligera"),
    (57, "Llovizna congelante intensa"),
    (61, "Lluvia ligera"),
    (63, "Lluvia moderada"),
    (65, "Lluvia fuerte"),
    (66, "Lluvia helada ligera"),
    (67, "Lluvia helada intensa"),
    (71, "Nevadas ligeras"),
    (73, "Nevadas moderadas"),
    (75, "Nevadas fuertes"),
    (77, "Granos de nieve"),
    (80, "Chubascos ligeros"),
    (81, "Chubascos moderados"),
    (82, "Chubascos violentos"),
    (85, "Chubascos de nieve ligeros"),
    (86, "Chubascos de nieve fuertes"),
    (95, "Tormenta"),
    (96, "Tormenta con granizo ligero"),
    (97, "Tormenta con granizo fuerte"),
];

const ENGLISH: &[(i64, &str)] = &[
    (0, "Clear"),
    (1, "Mostly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Fog"),
    (48, "Depositing rime fog"),
    (51, "Light drizzle"),
    (53, "Moderate drizzle"),
    (55, "Dense drizzle"),
    (56, "Light freezing drizzle"),
    (57, "Freezing drizzle"),
    (61, "Light rain"),
    (63, "Moderate rain"),
    (65, "Heavy rain"),
    (66, "Light freezing rain"),
    (67, "Freezing rain"),
    (71, "Light snow"),
    (73, "Moderate snow"),
    (75, "Heavy snow"),
    (77, "Snow grains"),
    (80, "Light showers"),
    (81, "Moderate showers"),
    (82, "Violent showers"),
    (85, "Light snow showers"),
    (86, "Heavy snow showers"),
    (95, "Thunderstorm"),
    (96, "Thunderstorm with slight hail"),
    (97, "Thunderstorm with heavy hail"),
];

static SPANISH_TABLE: LazyLock<HashMap<i64, &'static str>> =
    LazyLock::new(|| SPANISH.iter().copied().collect());

static ENGLISH_TABLE: LazyLock<HashMap<i64, &'static str>> =
    LazyLock::new(|| ENGLISH.iter().copied().collect());

fn table(locale: LocaleTag) -> &'static HashMap<i64, &'static str> {
    match locale {
        LocaleTag::Es => &*SPANISH_TABLE,
        LocaleTag::En => &*ENGLISH_TABLE,
    }
}

/// Describe a condition code. Unknown codes yield "Código {code}" / "Code {code}".
pub fn translate(code: i64, locale: LocaleTag) -> Cow<'static, str> {
    match table(locale).get(&code) {
        Some(text) => Cow::Borrowed(*text),
        None => match locale {
            LocaleTag::Es => Cow::Owned(format!("Código {code}")),
            LocaleTag::En => Cow::Owned(format!("Code {code}")),
        },
    }
}

/// Codes with a dedicated description, in ascending order.
pub fn known_codes() -> impl Iterator<Item = i64> {
    SPANISH.iter().map(|(code, _)| *code)
}
