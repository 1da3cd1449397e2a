//! Localized tour-guide site: locale-aware routing, a reserved-path gate,
//! and SEO metadata, sitemap and robots generation.

pub mod config;
pub mod handlers;
pub mod i18n;
pub mod pages;
pub mod render;
pub mod routing;
pub mod seo;
pub mod server;
