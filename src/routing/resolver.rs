//! Locale resolver: guarantees every served page carries a locale prefix.

use std::sync::Arc;

use crate::i18n::{Locale, LocaleRegistry};

/// What the HTTP layer should do with a resolved request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveAction {
    /// Path already carries a registered locale; delegate it unchanged.
    Continue,
    /// Path lacks a locale; redirect to the canonical path.
    Redirect,
}

/// Outcome of resolving a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub locale: Locale,
    pub canonical_path: String,
    pub action: ResolveAction,
}

impl Resolution {
    pub fn is_redirect(&self) -> bool {
        self.action == ResolveAction::Redirect
    }
}

#[derive(Debug, Clone)]
pub struct LocaleResolver {
    registry: Arc<LocaleRegistry>,
}

impl LocaleResolver {
    pub fn new(registry: Arc<LocaleRegistry>) -> Self {
        Self { registry }
    }

    /// Resolve the effective locale and canonical path for `path`.
    ///
    /// An unregistered first segment is never an error here: it is treated as
    /// an ordinary path segment and the default locale is prefixed to it.
    pub fn resolve(&self, path: &str) -> Resolution {
        let trimmed = path.trim_start_matches('/').trim_end_matches('/');
        let first_segment = trimmed.split('/').next().unwrap_or_default();

        if let Some(locale) = self.registry.get(first_segment) {
            return Resolution {
                locale,
                canonical_path: format!("/{}", trimmed),
                action: ResolveAction::Continue,
            };
        }

        let locale = self.registry.default_locale();
        let canonical_path = if trimmed.is_empty() {
            locale.prefix()
        } else {
            format!("{}/{}", locale.prefix(), trimmed)
        };

        Resolution {
            locale,
            canonical_path,
            action: ResolveAction::Redirect,
        }
    }

    /// Paths that skip locale resolution: files (last segment has a dot)
    /// and the `/api` tree.
    pub fn is_passthrough(path: &str) -> bool {
        let trimmed = path.trim_start_matches('/');
        if trimmed == "api" || trimmed.starts_with("api/") {
            return true;
        }

        trimmed
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .is_some_and(|last| last.contains('.'))
    }
}
