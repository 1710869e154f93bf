//! Supported display languages and language-keyed text bundles.

use serde::{Deserialize, Serialize};

/// A supported display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// English
    #[default]
    En,

    /// German
    De,
}

impl Locale {
    /// All supported locales, in display order
    pub const ALL: [Locale; 2] = [Locale::En, Locale::De];

    /// The locale tag (`en` / `de`)
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl std::str::FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "de" | "german" | "deutsch" => Ok(Locale::De),
            _ => anyhow::bail!("Unknown locale: {}", s),
        }
    }
}

/// Text available in every supported locale.
///
/// Both keys are required when decoding, so every record in a collection
/// carries the same set of locales. Either value may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub de: String,
}

impl LocalizedText {
    /// Create a bundle from both translations
    pub fn new(en: impl Into<String>, de: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            de: de.into(),
        }
    }

    /// Same text for every locale
    pub fn uniform(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            en: text.clone(),
            de: text,
        }
    }

    /// Text for a locale
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::De => &self.de,
        }
    }

    /// Replace the text for a locale
    pub fn set(&mut self, locale: Locale, text: impl Into<String>) {
        match locale {
            Locale::En => self.en = text.into(),
            Locale::De => self.de = text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_str() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("DE".parse::<Locale>().unwrap(), Locale::De);
        assert_eq!("deutsch".parse::<Locale>().unwrap(), Locale::De);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_locale_serializes_as_tag() {
        assert_eq!(serde_json::to_string(&Locale::De).unwrap(), "\"de\"");
        assert_eq!(Locale::En.to_string(), "en");
    }

    #[test]
    fn test_localized_text_requires_both_keys() {
        let ok: Result<LocalizedText, _> = serde_json::from_str(r#"{"en":"Hi","de":""}"#);
        assert_eq!(ok.unwrap().get(Locale::De), "");

        let missing: Result<LocalizedText, _> = serde_json::from_str(r#"{"en":"Hi"}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn test_localized_text_set() {
        let mut text = LocalizedText::uniform("Design");
        text.set(Locale::De, "Gestaltung");
        assert_eq!(text.get(Locale::En), "Design");
        assert_eq!(text.get(Locale::De), "Gestaltung");
    }
}
