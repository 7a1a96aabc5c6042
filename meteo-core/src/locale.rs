/// Output language. Governs text only, never the underlying data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LocaleTag {
    #[default]
    Es,
    En,
}

impl LocaleTag {
    /// "es", "ES", "es-AR", "español" → Spanish; anything else → English.
    pub fn from_language(language: &str) -> Self {
        if language.to_lowercase().starts_with("es") {
            LocaleTag::Es
        } else {
            LocaleTag::En
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LocaleTag::Es => "es",
            LocaleTag::En => "en",
        }
    }

    /// Placeholder for a missing value.
    pub fn not_available(&self) -> &'static str {
        match self {
            LocaleTag::Es => "N/D",
            LocaleTag::En => "N/A",
        }
    }
}

impl std::fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
