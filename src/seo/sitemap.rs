//! Sitemap generation: every page under every locale.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::Arc;

use crate::i18n::LocaleRegistry;
use crate::pages::SitePage;
use crate::routing::{GateDecision, RouteGate};
use crate::seo::{escape_markup, page_url};

/// `hreflang` key for the fallback alternate.
const X_DEFAULT: &str = "x-default";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapAlternates {
    pub languages: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f64,
    pub alternates: SitemapAlternates,
}

pub struct SitemapGenerator {
    registry: Arc<LocaleRegistry>,
    gate: Arc<RouteGate>,
    base_url: String,
}

impl SitemapGenerator {
    pub fn new(registry: Arc<LocaleRegistry>, gate: Arc<RouteGate>, base_url: &str) -> Self {
        Self {
            registry,
            gate,
            base_url: crate::config::normalize_base_url(base_url),
        }
    }

    pub fn generate(&self) -> Vec<SitemapEntry> {
        self.generate_at(Utc::now())
    }

    /// Generate entries stamped with `now`.
    ///
    /// Order is page-major then locale in registry order. Paths the route
    /// gate blocks are never listed.
    pub fn generate_at(&self, now: DateTime<Utc>) -> Vec<SitemapEntry> {
        let mut entries = Vec::with_capacity(SitePage::ALL.len() * self.registry.len());

        for page in SitePage::ALL {
            let languages = self.languages(page);

            for locale in self.registry.locales() {
                if self.gate.check(&page.localized_path(locale.code())) == GateDecision::Blocked {
                    continue;
                }

                let (change_frequency, priority) = if page.is_root() {
                    (ChangeFrequency::Weekly, 1.0)
                } else {
                    (ChangeFrequency::Monthly, 0.7)
                };

                entries.push(SitemapEntry {
                    url: page_url(&self.base_url, locale.code(), page),
                    last_modified: now,
                    change_frequency,
                    priority,
                    alternates: SitemapAlternates {
                        languages: languages.clone(),
                    },
                });
            }
        }

        entries
    }

    fn languages(&self, page: SitePage) -> BTreeMap<String, String> {
        let mut languages: BTreeMap<String, String> = self
            .registry
            .locales()
            .map(|l| (l.code().to_string(), page_url(&self.base_url, l.code(), page)))
            .collect();

        languages.insert(
            X_DEFAULT.to_string(),
            page_url(&self.base_url, self.registry.default_locale().code(), page),
        );
        languages
    }

    /// Render entries as a sitemap XML document with `xhtml:link` alternates.
    pub fn to_xml(entries: &[SitemapEntry]) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
             xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
        );

        for entry in entries {
            xml.push_str("<url>\n");
            let _ = writeln!(xml, "<loc>{}</loc>", escape_markup(&entry.url));
            for (hreflang, href) in &entry.alternates.languages {
                let _ = writeln!(
                    xml,
                    "<xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\" />",
                    escape_markup(hreflang),
                    escape_markup(href)
                );
            }
            let _ = writeln!(
                xml,
                "<lastmod>{}</lastmod>",
                entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true)
            );
            let _ = writeln!(
                xml,
                "<changefreq>{}</changefreq>",
                entry.change_frequency.as_str()
            );
            let _ = writeln!(xml, "<priority>{:.1}</priority>", entry.priority);
            xml.push_str("</url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}
