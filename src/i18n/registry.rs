//! Locale registry: Single source of truth for all supported locales.
//!
//! The registry is built once at startup and shared (behind an `Arc`) by the
//! route gate, the locale resolver and every generator, so they all agree on
//! the same set of codes in the same order.

use crate::i18n::Locale;
use thiserror::Error;

/// Configuration for a supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    /// Short locale code used as the URL prefix (e.g., "en", "fr")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "French")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Français")
    pub native_name: &'static str,

    /// Whether unprefixed requests are assigned this locale (exactly one)
    pub is_default: bool,
}

/// Errors raised when a registry is built from an invalid locale list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("locale registry must contain at least one locale")]
    Empty,
    #[error("locale code '{0}' is registered more than once")]
    Duplicate(&'static str),
    #[error("no default locale found in registry")]
    NoDefault,
    #[error("multiple default locales found in registry")]
    MultipleDefaults,
}

/// Immutable, ordered set of supported locales.
#[derive(Debug)]
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
    default_index: usize,
}

impl LocaleRegistry {
    /// Build a registry from an explicit locale list.
    ///
    /// # Errors
    /// Fails if the list is empty, repeats a code, or does not declare exactly
    /// one default locale.
    pub fn new(locales: Vec<LocaleConfig>) -> Result<Self, RegistryError> {
        if locales.is_empty() {
            return Err(RegistryError::Empty);
        }

        for (i, locale) in locales.iter().enumerate() {
            if locales[..i].iter().any(|other| other.code == locale.code) {
                return Err(RegistryError::Duplicate(locale.code));
            }
        }

        let defaults: Vec<usize> = locales
            .iter()
            .enumerate()
            .filter(|(_, locale)| locale.is_default)
            .map(|(i, _)| i)
            .collect();

        match defaults.as_slice() {
            [] => Err(RegistryError::NoDefault),
            [index] => Ok(Self {
                default_index: *index,
                locales,
            }),
            _ => Err(RegistryError::MultipleDefaults),
        }
    }

    /// The six locales the site is published in, English first and default.
    pub fn standard() -> Self {
        Self {
            locales: standard_locales(),
            default_index: 0,
        }
    }

    /// Look up a registered locale by its code.
    ///
    /// Matching is exact and case-sensitive: URL prefixes are always lowercase.
    pub fn get(&self, code: &str) -> Option<Locale> {
        self.locales
            .iter()
            .find(|locale| locale.code == code)
            .map(|config| Locale::new(config.code))
    }

    /// Get the full configuration for a locale code.
    pub fn config(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Check if a code is registered.
    pub fn contains(&self, code: &str) -> bool {
        self.config(code).is_some()
    }

    /// The locale assigned to requests without a locale prefix.
    pub fn default_locale(&self) -> Locale {
        Locale::new(self.locales[self.default_index].code)
    }

    /// All registered locales, in registry order.
    pub fn locales(&self) -> impl Iterator<Item = Locale> + '_ {
        self.locales.iter().map(|config| Locale::new(config.code))
    }

    /// All registered codes, in registry order.
    pub fn codes(&self) -> Vec<&'static str> {
        self.locales.iter().map(|config| config.code).collect()
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: true,
        },
        LocaleConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            is_default: false,
        },
        LocaleConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            is_default: false,
        },
        LocaleConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            is_default: false,
        },
        LocaleConfig {
            code: "zh",
            name: "Chinese",
            native_name: "中文",
            is_default: false,
        },
        LocaleConfig {
            code: "ja",
            name: "Japanese",
            native_name: "日本語",
            is_default: false,
        },
    ]
}
