use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::TermsError;

/// Output language of the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    Zh = 0,
    #[default]
    En = 1,
}

impl Locale {
    /// Look up a locale by its numeric identifier.
    pub fn from_id(id: u8) -> Result<Self, TermsError> {
        match id {
            0 => Ok(Locale::Zh),
            1 => Ok(Locale::En),
            other => Err(TermsError::UnsupportedLocale(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Zh => "zh",
            Locale::En => "en",
        }
    }

    fn builtin_source(&self) -> &'static str {
        match self {
            Locale::Zh => include_str!("../locales/zh.json"),
            Locale::En => include_str!("../locales/en.json"),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = TermsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh" | "zh-cn" | "0" => Ok(Locale::Zh),
            "en" | "en-us" | "1" => Ok(Locale::En),
            _ => Err(TermsError::UnsupportedLocale(s.to_string())),
        }
    }
}

/// Section-label keys looked up in a [`TermDictionary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermKey {
    Overview,
    Version,
    VersionInfo,
    UriScheme,
    Contact,
    License,
    Servers,
    Tags,
    Consumes,
    Produces,
    Paths,
    Parameters,
    Responses,
    Components,
}

impl TermKey {
    /// Every key a dictionary must define to render a full document.
    pub const REQUIRED: [TermKey; 14] = [
        TermKey::Overview,
        TermKey::Version,
        TermKey::VersionInfo,
        TermKey::UriScheme,
        TermKey::Contact,
        TermKey::License,
        TermKey::Servers,
        TermKey::Tags,
        TermKey::Consumes,
        TermKey::Produces,
        TermKey::Paths,
        TermKey::Parameters,
        TermKey::Responses,
        TermKey::Components,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TermKey::Overview => "overview",
            TermKey::Version => "version",
            TermKey::VersionInfo => "version_info",
            TermKey::UriScheme => "uri_scheme",
            TermKey::Contact => "contact",
            TermKey::License => "license",
            TermKey::Servers => "servers",
            TermKey::Tags => "tags",
            TermKey::Consumes => "consumes",
            TermKey::Produces => "produces",
            TermKey::Paths => "paths",
            TermKey::Parameters => "parameters",
            TermKey::Responses => "responses",
            TermKey::Components => "components",
        }
    }
}

/// Locale-specific labels for the section headers of the rendered document.
#[derive(Debug, Clone)]
pub struct TermDictionary {
    locale: Locale,
    entries: IndexMap<String, String>,
}

impl TermDictionary {
    /// The dictionary shipped with the crate for `locale`.
    pub fn builtin(locale: Locale) -> Result<Self, TermsError> {
        Self::from_json(locale, locale.builtin_source())
    }

    /// Parse a JSON object of string pairs, rejecting it unless every
    /// [`TermKey::REQUIRED`] key is present.
    pub fn from_json(locale: Locale, input: &str) -> Result<Self, TermsError> {
        let entries: IndexMap<String, String> = serde_json::from_str(input)
            .map_err(|source| TermsError::Malformed { locale, source })?;

        let missing: Vec<String> = TermKey::REQUIRED
            .iter()
            .map(TermKey::as_str)
            .filter(|key| !entries.contains_key(*key))
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(TermsError::MissingKeys {
                locale,
                keys: missing,
            });
        }

        Ok(Self { locale, entries })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn term(&self, key: TermKey) -> &str {
        self.get(key.as_str())
    }

    /// Raw lookup; unknown keys yield an empty string.
    pub fn get(&self, key: &str) -> &str {
        self.entries.get(key).map(String::as_str).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dictionaries_are_complete() {
        for locale in [Locale::Zh, Locale::En] {
            let terms = TermDictionary::builtin(locale).unwrap();
            for key in TermKey::REQUIRED {
                assert!(!terms.term(key).is_empty(), "{locale} lacks {}", key.as_str());
            }
        }
    }

    #[test]
    fn test_english_labels() {
        let terms = TermDictionary::builtin(Locale::En).unwrap();
        assert_eq!(terms.term(TermKey::Overview), "Overview");
        assert_eq!(terms.term(TermKey::Paths), "Paths");
        assert_eq!(terms.get("no_such_key"), "");
    }

    #[test]
    fn test_locale_ids_and_names() {
        assert_eq!(Locale::from_id(0).unwrap(), Locale::Zh);
        assert_eq!(Locale::from_id(1).unwrap(), Locale::En);
        assert!(matches!(
            Locale::from_id(7),
            Err(TermsError::UnsupportedLocale(_))
        ));
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("zh".parse::<Locale>().unwrap(), Locale::Zh);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_partial_dictionary_rejected() {
        let err = TermDictionary::from_json(Locale::En, r#"{"overview": "Overview"}"#).unwrap_err();
        match err {
            TermsError::MissingKeys { locale, keys } => {
                assert_eq!(locale, Locale::En);
                assert!(keys.contains(&"paths".to_string()));
                assert!(!keys.contains(&"overview".to_string()));
            }
            other => panic!("expected MissingKeys, got {other:?}"),
        }
    }

    #[test]
    fn test_non_string_values_rejected() {
        let err = TermDictionary::from_json(Locale::Zh, r#"{"overview": 1}"#).unwrap_err();
        assert!(matches!(err, TermsError::Malformed { .. }));
    }
}
