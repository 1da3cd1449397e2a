use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::pages::SitePage;

/// Contact details shown on pages and in structured data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
}

/// A navigation entry: message key plus the page it links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label_key: &'static str,
    pub page: SitePage,
}

#[derive(Debug, Clone)]
pub struct Config {
    // Site
    /// Canonical base URL without trailing slash; used by every generator
    pub base_url: String,
    pub site_name: String,
    pub contact: ContactInfo,
    pub navigation: Vec<NavItem>,

    // Messages
    /// Load bundles from this directory instead of the embedded set
    pub messages_dir: Option<PathBuf>,

    // Server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {}", value))?,
            Err(_) => 3000,
        };

        Ok(Self {
            // Site
            base_url: normalize_base_url(
                &std::env::var("SITE_BASE_URL")
                    .unwrap_or_else(|_| "https://www.example-tours.com".to_string()),
            ),
            site_name: std::env::var("SITE_NAME").unwrap_or_else(|_| "Andes Tour Guide".to_string()),
            contact: ContactInfo {
                email: std::env::var("CONTACT_EMAIL")
                    .unwrap_or_else(|_| "hello@example-tours.com".to_string()),
                phone: std::env::var("CONTACT_PHONE")
                    .unwrap_or_else(|_| "+51 900 000 000".to_string()),
            },
            navigation: default_navigation(),

            // Messages
            messages_dir: std::env::var("MESSAGES_DIR")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),

            // Server
            port,
        })
    }

    /// Host name derived from the base URL (protocol stripped).
    pub fn host(&self) -> &str {
        host_of(&self.base_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://www.example-tours.com".to_string(),
            site_name: "Andes Tour Guide".to_string(),
            contact: ContactInfo {
                email: "hello@example-tours.com".to_string(),
                phone: "+51 900 000 000".to_string(),
            },
            navigation: default_navigation(),
            messages_dir: None,
            port: 3000,
        }
    }
}

/// Strip surrounding whitespace and trailing slashes from a base URL.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Host part of a base URL: everything after `://`, or the whole string.
pub fn host_of(base_url: &str) -> &str {
    base_url
        .split_once("://")
        .map(|(_, host)| host)
        .unwrap_or(base_url)
}

fn default_navigation() -> Vec<NavItem> {
    vec![
        NavItem {
            label_key: "home",
            page: SitePage::Home,
        },
        NavItem {
            label_key: "about",
            page: SitePage::About,
        },
        NavItem {
            label_key: "portfolio",
            page: SitePage::Portfolio,
        },
        NavItem {
            label_key: "contact",
            page: SitePage::Contact,
        },
    ]
}
