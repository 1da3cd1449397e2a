//! Per-locale, per-page metadata.

use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::Config;
use crate::i18n::{BundleError, BundleLoader, Locale, LocaleRegistry};
use crate::pages::SitePage;
use crate::seo::page_url;

/// Regional variant used when a locale has no entry in the table.
pub const DEFAULT_OG_LOCALE: &str = "en_US";

const OG_IMAGE_PATH: &str = "/og-image.jpg";
const OG_IMAGE_WIDTH: u32 = 1200;
const OG_IMAGE_HEIGHT: u32 = 630;

/// Map a locale code to the regional variant used by social previews.
pub fn open_graph_locale(code: &str) -> &'static str {
    match code {
        "en" => "en_US",
        "fr" => "fr_FR",
        "de" => "de_DE",
        "es" => "es_ES",
        "zh" => "zh_CN",
        "ja" => "ja_JP",
        _ => DEFAULT_OG_LOCALE,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alternates {
    pub canonical: String,
    /// One URL per registered locale, keyed by locale code
    pub languages: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub locale: String,
    pub alternate_locale: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub images: Vec<SocialImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RobotsDirectives {
    pub index: bool,
    pub follow: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRecord {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub alternates: Alternates,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: RobotsDirectives,
}

/// Builds metadata from a locale's message bundle and the site config.
pub struct MetadataGenerator {
    registry: Arc<LocaleRegistry>,
    bundles: Arc<dyn BundleLoader>,
    config: Arc<Config>,
}

impl MetadataGenerator {
    pub fn new(
        registry: Arc<LocaleRegistry>,
        bundles: Arc<dyn BundleLoader>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            registry,
            bundles,
            config,
        }
    }

    /// Generate the metadata record for `page` under `locale`.
    ///
    /// # Errors
    /// Propagates [`BundleError::NotFound`] when the locale has no bundle.
    pub fn generate(&self, locale: Locale, page: SitePage) -> Result<MetadataRecord, BundleError> {
        let bundle = self.bundles.load(locale)?;
        let meta = &bundle.meta;

        let title = match bundle.page(page.message_key()).and_then(|p| p.title.as_deref()) {
            Some(page_title) if !page.is_root() => format!("{} | {}", page_title, meta.title),
            _ => meta.title.clone(),
        };

        let canonical = page_url(&self.config.base_url, locale.code(), page);
        let languages = self
            .registry
            .locales()
            .map(|l| {
                (
                    l.code().to_string(),
                    page_url(&self.config.base_url, l.code(), page),
                )
            })
            .collect();

        let alternate_locale = self
            .registry
            .locales()
            .filter(|l| *l != locale)
            .map(|l| open_graph_locale(l.code()).to_string())
            .collect();

        let image_url = format!("{}{}", self.config.base_url, OG_IMAGE_PATH);

        Ok(MetadataRecord {
            title: title.clone(),
            description: meta.description.clone(),
            keywords: meta.keywords.clone(),
            alternates: Alternates {
                canonical: canonical.clone(),
                languages,
            },
            open_graph: OpenGraph {
                title: title.clone(),
                description: meta.description.clone(),
                url: canonical,
                site_name: self.config.site_name.clone(),
                locale: open_graph_locale(locale.code()).to_string(),
                alternate_locale,
                kind: "website".to_string(),
                images: vec![SocialImage {
                    url: image_url.clone(),
                    width: OG_IMAGE_WIDTH,
                    height: OG_IMAGE_HEIGHT,
                    alt: meta.title.clone(),
                }],
            },
            twitter: TwitterCard {
                card: "summary_large_image".to_string(),
                title,
                description: meta.description.clone(),
                images: vec![image_url],
            },
            robots: RobotsDirectives {
                index: true,
                follow: true,
            },
        })
    }

    /// JSON-LD `TravelAgency` block for a locale's pages.
    pub fn structured_data(&self, locale: Locale) -> Result<serde_json::Value, BundleError> {
        let bundle = self.bundles.load(locale)?;

        Ok(json!({
            "@context": "https://schema.org",
            "@type": "TravelAgency",
            "name": self.config.site_name,
            "description": bundle.meta.description,
            "url": page_url(&self.config.base_url, locale.code(), SitePage::Home),
            "image": format!("{}{}", self.config.base_url, OG_IMAGE_PATH),
            "email": self.config.contact.email,
            "telephone": self.config.contact.phone,
            "inLanguage": locale.code(),
            "availableLanguage": self.registry.codes(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{BundleStore, MessageBundle};

    fn generator() -> (Arc<LocaleRegistry>, MetadataGenerator) {
        let registry = Arc::new(LocaleRegistry::standard());
        let bundles = Arc::new(BundleStore::embedded(&registry).unwrap());
        let config = Arc::new(Config {
            base_url: "https://tours.test".to_string(),
            ..Config::default()
        });
        let generator = MetadataGenerator::new(Arc::clone(&registry), bundles, config);
        (registry, generator)
    }

    /// Loader that only knows English.
    struct EnglishOnly(Arc<MessageBundle>);

    impl BundleLoader for EnglishOnly {
        fn load(&self, locale: Locale) -> Result<Arc<MessageBundle>, BundleError> {
            if locale.code() == "en" {
                Ok(Arc::clone(&self.0))
            } else {
                Err(BundleError::NotFound(locale.code().to_string()))
            }
        }
    }

    // ==================== Open Graph Locale Tests ====================

    #[test]
    fn test_open_graph_locale_table() {
        assert_eq!(open_graph_locale("en"), "en_US");
        assert_eq!(open_graph_locale("fr"), "fr_FR");
        assert_eq!(open_graph_locale("de"), "de_DE");
        assert_eq!(open_graph_locale("es"), "es_ES");
        assert_eq!(open_graph_locale("zh"), "zh_CN");
        assert_eq!(open_graph_locale("ja"), "ja_JP");
    }

    #[test]
    fn test_open_graph_locale_fallback() {
        assert_eq!(open_graph_locale("pt"), DEFAULT_OG_LOCALE);
        assert_eq!(open_graph_locale(""), DEFAULT_OG_LOCALE);
    }

    // ==================== Generation Tests ====================

    #[test]
    fn test_french_about_metadata() {
        let (registry, generator) = generator();
        let fr = registry.get("fr").unwrap();
        let record = generator.generate(fr, SitePage::About).unwrap();

        assert_eq!(record.alternates.canonical, "https://tours.test/fr/about");
        assert_eq!(record.alternates.languages.len(), 6);
        for code in ["en", "fr", "de", "es", "zh", "ja"] {
            assert_eq!(
                record.alternates.languages[code],
                format!("https://tours.test/{}/about", code)
            );
        }
        assert_eq!(record.open_graph.locale, "fr_FR");
        assert_eq!(record.open_graph.url, record.alternates.canonical);
        assert!(record.title.starts_with("À propos | "));
    }

    #[test]
    fn test_alternate_locales_exclude_current() {
        let (registry, generator) = generator();
        let record = generator
            .generate(registry.get("ja").unwrap(), SitePage::Home)
            .unwrap();
        assert_eq!(record.open_graph.alternate_locale.len(), 5);
        assert!(!record.open_graph.alternate_locale.contains(&"ja_JP".to_string()));
        assert!(record.open_graph.alternate_locale.contains(&"en_US".to_string()));
    }

    #[test]
    fn test_home_uses_site_title() {
        let (registry, generator) = generator();
        let en = registry.default_locale();
        let record = generator.generate(en, SitePage::Home).unwrap();
        assert_eq!(
            record.title,
            "Andes Tour Guide | Private Tours in Cusco and Machu Picchu"
        );
        assert_eq!(record.alternates.canonical, "https://tours.test/en");
        assert!(!record.keywords.is_empty());
    }

    #[test]
    fn test_social_fields() {
        let (registry, generator) = generator();
        let record = generator
            .generate(registry.default_locale(), SitePage::Contact)
            .unwrap();

        assert_eq!(record.twitter.card, "summary_large_image");
        assert_eq!(record.twitter.images, vec!["https://tours.test/og-image.jpg"]);
        assert_eq!(record.open_graph.kind, "website");
        assert_eq!(record.open_graph.images[0].width, 1200);
        assert_eq!(record.open_graph.images[0].height, 630);
        assert!(record.robots.index && record.robots.follow);
    }

    #[test]
    fn test_generation_is_idempotent() {
        let (registry, generator) = generator();
        let es = registry.get("es").unwrap();
        let first = generator.generate(es, SitePage::Portfolio).unwrap();
        let second = generator.generate(es, SitePage::Portfolio).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let (registry, generator) = generator();
        let record = generator
            .generate(registry.default_locale(), SitePage::Home)
            .unwrap();
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["openGraph"]["locale"], "en_US");
        assert_eq!(value["openGraph"]["type"], "website");
        assert!(value["openGraph"]["siteName"].is_string());
        assert!(value["alternates"]["languages"]["zh"].is_string());
    }

    #[test]
    fn test_missing_bundle_is_not_found() {
        let registry = Arc::new(LocaleRegistry::standard());
        let bundle = MessageBundle::from_json(r#"{"meta": {"title": "T", "description": "D"}}"#)
            .unwrap();
        let generator = MetadataGenerator::new(
            Arc::clone(&registry),
            Arc::new(EnglishOnly(Arc::new(bundle))),
            Arc::new(Config::default()),
        );

        let err = generator
            .generate(registry.get("de").unwrap(), SitePage::Home)
            .unwrap_err();
        assert!(matches!(err, BundleError::NotFound(code) if code == "de"));

        // Without a page entry the site title is used as-is
        let record = generator
            .generate(registry.default_locale(), SitePage::About)
            .unwrap();
        assert_eq!(record.title, "T");
        assert!(record.keywords.is_empty());
    }

    // ==================== Structured Data Tests ====================

    #[test]
    fn test_structured_data_uses_single_base_url() {
        let (registry, generator) = generator();
        let value = generator.structured_data(registry.get("fr").unwrap()).unwrap();

        assert_eq!(value["@type"], "TravelAgency");
        assert_eq!(value["url"], "https://tours.test/fr");
        assert_eq!(value["image"], "https://tours.test/og-image.jpg");
        assert_eq!(value["inLanguage"], "fr");
        assert_eq!(value["availableLanguage"].as_array().unwrap().len(), 6);
    }
}
