//! SEO output: page metadata, sitemap and robots policy.
//!
//! All three read the same locale registry and the same configured base URL.

mod metadata;
mod robots;
mod sitemap;

pub use metadata::{
    open_graph_locale, Alternates, MetadataGenerator, MetadataRecord, OpenGraph, RobotsDirectives,
    SocialImage, TwitterCard, DEFAULT_OG_LOCALE,
};
pub use robots::{RobotsGenerator, RobotsPolicy, RobotsRule, SOCIAL_CRAWLERS};
pub use sitemap::{ChangeFrequency, SitemapAlternates, SitemapEntry, SitemapGenerator};

use crate::pages::SitePage;

/// Absolute URL of a page under a locale.
pub fn page_url(base_url: &str, locale_code: &str, page: SitePage) -> String {
    format!("{}{}", base_url, page.localized_path(locale_code))
}

/// Escape text for inclusion in XML or HTML, content and attribute values.
pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
