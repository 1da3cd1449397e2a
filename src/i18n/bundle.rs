//! Message bundles: per-locale translated strings and page metadata.
//!
//! Bundles are looked up through the [`BundleLoader`] port so the metadata
//! and page code never care where the JSON came from. Two stores are
//! provided: one compiled into the binary and one read from a directory.

use crate::i18n::{Locale, LocaleRegistry};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// The `meta` section of a bundle.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MetaMessages {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Strings for a single page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageMessages {
    /// Page-specific title, prepended to the site title when present
    #[serde(default)]
    pub title: Option<String>,
    pub heading: String,
    #[serde(default)]
    pub body: String,
}

/// All localized strings for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageBundle {
    pub meta: MetaMessages,
    #[serde(default)]
    pub nav: BTreeMap<String, String>,
    #[serde(default)]
    pub pages: BTreeMap<String, PageMessages>,
}

impl MessageBundle {
    /// Parse a bundle from its JSON source.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    pub fn page(&self, key: &str) -> Option<&PageMessages> {
        self.pages.get(key)
    }

    pub fn nav_label(&self, key: &str) -> Option<&str> {
        self.nav.get(key).map(String::as_str)
    }
}

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("no message bundle for locale '{0}'")]
    NotFound(String),
    #[error("failed to read message bundle {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid message bundle for locale '{code}': {source}")]
    Parse {
        code: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Keyed access to message bundles.
pub trait BundleLoader: Send + Sync {
    /// Load the bundle for a locale.
    ///
    /// # Errors
    /// Returns [`BundleError::NotFound`] when the store holds no bundle for it.
    fn load(&self, locale: Locale) -> Result<Arc<MessageBundle>, BundleError>;
}

/// Bundle sources compiled into the binary.
const EMBEDDED_SOURCES: &[(&str, &str)] = &[
    ("en", include_str!("../../messages/en.json")),
    ("fr", include_str!("../../messages/fr.json")),
    ("de", include_str!("../../messages/de.json")),
    ("es", include_str!("../../messages/es.json")),
    ("zh", include_str!("../../messages/zh.json")),
    ("ja", include_str!("../../messages/ja.json")),
];

/// In-memory bundle store, parsed once at construction.
#[derive(Debug, Default)]
pub struct BundleStore {
    bundles: HashMap<&'static str, Arc<MessageBundle>>,
}

impl BundleStore {
    /// Build a store from the bundles compiled into the binary.
    ///
    /// Only locales in the registry are parsed; a registered locale with no
    /// embedded source is left out and answers `NotFound`.
    pub fn embedded(registry: &LocaleRegistry) -> Result<Self, BundleError> {
        let mut bundles = HashMap::new();

        for locale in registry.locales() {
            let Some((_, source)) = EMBEDDED_SOURCES
                .iter()
                .find(|(code, _)| *code == locale.code())
            else {
                warn!("No embedded message bundle for locale {}", locale);
                continue;
            };

            let bundle = MessageBundle::from_json(source).map_err(|source| BundleError::Parse {
                code: locale.code().to_string(),
                source,
            })?;
            bundles.insert(locale.code(), Arc::new(bundle));
        }

        debug!("Loaded {} embedded message bundles", bundles.len());
        Ok(Self { bundles })
    }

    /// Build a store from `<dir>/<code>.json` files.
    ///
    /// A missing file leaves that locale out of the store. Any other I/O
    /// failure or malformed JSON fails construction.
    pub fn from_dir(dir: impl AsRef<Path>, registry: &LocaleRegistry) -> Result<Self, BundleError> {
        let dir = dir.as_ref();
        let mut bundles = HashMap::new();

        for locale in registry.locales() {
            let path = dir.join(format!("{}.json", locale.code()));
            let source = match std::fs::read_to_string(&path) {
                Ok(source) => source,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    warn!("Message bundle missing: {}", path.display());
                    continue;
                }
                Err(source) => return Err(BundleError::Read { path, source }),
            };

            let bundle = MessageBundle::from_json(&source).map_err(|source| BundleError::Parse {
                code: locale.code().to_string(),
                source,
            })?;
            bundles.insert(locale.code(), Arc::new(bundle));
        }

        debug!(
            "Loaded {} message bundles from {}",
            bundles.len(),
            dir.display()
        );
        Ok(Self { bundles })
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

impl BundleLoader for BundleStore {
    fn load(&self, locale: Locale) -> Result<Arc<MessageBundle>, BundleError> {
        self.bundles
            .get(locale.code())
            .cloned()
            .ok_or_else(|| BundleError::NotFound(locale.code().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleConfig;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"{"meta": {"title": "T", "description": "D"}}"#;

    // ==================== Parsing Tests ====================

    #[test]
    fn test_parse_minimal_bundle() {
        let bundle = MessageBundle::from_json(MINIMAL).unwrap();
        assert_eq!(bundle.meta.title, "T");
        assert_eq!(bundle.meta.description, "D");
        assert!(bundle.meta.keywords.is_empty());
        assert!(bundle.pages.is_empty());
        assert!(bundle.nav.is_empty());
    }

    #[test]
    fn test_parse_rejects_missing_meta() {
        assert!(MessageBundle::from_json(r#"{"nav": {}}"#).is_err());
    }

    #[test]
    fn test_page_and_nav_lookup() {
        let bundle = MessageBundle::from_json(
            r#"{
                "meta": {"title": "T", "description": "D", "keywords": ["a", "b"]},
                "nav": {"about": "About us"},
                "pages": {"about": {"title": "About", "heading": "Who we are"}}
            }"#,
        )
        .unwrap();

        assert_eq!(bundle.meta.keywords, vec!["a", "b"]);
        assert_eq!(bundle.nav_label("about"), Some("About us"));
        assert_eq!(bundle.nav_label("contact"), None);

        let page = bundle.page("about").unwrap();
        assert_eq!(page.title.as_deref(), Some("About"));
        assert_eq!(page.heading, "Who we are");
        assert_eq!(page.body, "");
    }

    // ==================== Embedded Store Tests ====================

    #[test]
    fn test_embedded_store_has_every_standard_locale() {
        let registry = LocaleRegistry::standard();
        let store = BundleStore::embedded(&registry).expect("embedded bundles parse");
        assert_eq!(store.len(), registry.len());

        for locale in registry.locales() {
            let bundle = store.load(locale).expect("bundle present");
            assert!(!bundle.meta.title.is_empty(), "{} title", locale);
            assert!(!bundle.meta.description.is_empty(), "{} description", locale);
            for key in ["home", "about", "contact", "portfolio"] {
                assert!(bundle.page(key).is_some(), "{} page {}", locale, key);
                assert!(bundle.nav_label(key).is_some(), "{} nav {}", locale, key);
            }
        }
    }

    #[test]
    fn test_embedded_store_skips_unknown_registry_codes() {
        let registry = LocaleRegistry::new(vec![
            LocaleConfig {
                code: "en",
                name: "English",
                native_name: "English",
                is_default: true,
            },
            LocaleConfig {
                code: "pt",
                name: "Portuguese",
                native_name: "Português",
                is_default: false,
            },
        ])
        .unwrap();

        let store = BundleStore::embedded(&registry).unwrap();
        assert!(store.load(registry.get("en").unwrap()).is_ok());

        let err = store.load(registry.get("pt").unwrap()).unwrap_err();
        assert!(matches!(err, BundleError::NotFound(code) if code == "pt"));
    }

    #[test]
    fn test_load_returns_shared_bundle() {
        let registry = LocaleRegistry::standard();
        let store = BundleStore::embedded(&registry).unwrap();
        let first = store.load(registry.default_locale()).unwrap();
        let second = store.load(registry.default_locale()).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    // ==================== Directory Store Tests ====================

    #[test]
    fn test_from_dir_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("en.json"), MINIMAL).unwrap();

        let registry = LocaleRegistry::standard();
        let store = BundleStore::from_dir(temp_dir.path(), &registry).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.load(registry.get("en").unwrap()).unwrap().meta.title, "T");
        assert!(matches!(
            store.load(registry.get("fr").unwrap()),
            Err(BundleError::NotFound(_))
        ));
    }

    #[test]
    fn test_from_dir_malformed_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("fr.json"), "{ not json").unwrap();

        let registry = LocaleRegistry::standard();
        let err = BundleStore::from_dir(temp_dir.path(), &registry).unwrap_err();
        assert!(matches!(err, BundleError::Parse { code, .. } if code == "fr"));
    }

    #[test]
    fn test_from_dir_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let store = BundleStore::from_dir(temp_dir.path(), &LocaleRegistry::standard()).unwrap();
        assert!(store.is_empty());
    }
}
