//! Static page paths, enumerated independently of locale.

/// A logical page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SitePage {
    Home,
    About,
    Contact,
    Portfolio,
}

impl SitePage {
    /// All pages in sitemap order.
    pub const ALL: [SitePage; 4] = [
        SitePage::Home,
        SitePage::About,
        SitePage::Contact,
        SitePage::Portfolio,
    ];

    /// Locale-relative path: empty for the home page.
    pub fn path(&self) -> &'static str {
        match self {
            SitePage::Home => "",
            SitePage::About => "about",
            SitePage::Contact => "contact",
            SitePage::Portfolio => "portfolio",
        }
    }

    pub fn from_path(path: &str) -> Option<SitePage> {
        Self::ALL.into_iter().find(|page| page.path() == path)
    }

    /// Key of this page's entry in the message bundle.
    pub fn message_key(&self) -> &'static str {
        match self {
            SitePage::Home => "home",
            other => other.path(),
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, SitePage::Home)
    }

    /// Path under a locale prefix, e.g. `/fr/about` or `/fr`.
    pub fn localized_path(&self, locale_code: &str) -> String {
        if self.is_root() {
            format!("/{}", locale_code)
        } else {
            format!("/{}/{}", locale_code, self.path())
        }
    }
}
