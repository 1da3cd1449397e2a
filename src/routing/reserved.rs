//! Reserved paths: one segment name expanded against the locale registry.
//!
//! The same list drives the route gate's block predicate and the robots
//! disallow set, so what is blocked and what is declared disallowed cannot
//! drift apart.

use crate::i18n::LocaleRegistry;

/// Segment hidden from navigation and search indexing.
pub const RESERVED_SEGMENT: &str = "packages";

#[derive(Debug, Clone, PartialEq, Eq)]
struct ReservedPath {
    path: String,
    segments: Vec<String>,
}

/// Expanded set of reserved path prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedPaths {
    rules: Vec<ReservedPath>,
}

impl ReservedPaths {
    /// Expand `segment` into `/segment` plus `/<locale>/segment` for every
    /// registered locale, in registry order.
    pub fn derive(segment: &str, registry: &LocaleRegistry) -> Self {
        let mut rules = vec![ReservedPath {
            path: format!("/{}", segment),
            segments: vec![segment.to_string()],
        }];

        rules.extend(registry.locales().map(|locale| ReservedPath {
            path: format!("/{}/{}", locale.code(), segment),
            segments: vec![locale.code().to_string(), segment.to_string()],
        }));

        Self { rules }
    }

    /// Reserved paths for the standard `packages` segment.
    pub fn packages(registry: &LocaleRegistry) -> Self {
        Self::derive(RESERVED_SEGMENT, registry)
    }

    /// The expanded paths, e.g. `["/packages", "/en/packages", ...]`.
    pub fn paths(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.path.as_str()).collect()
    }

    /// Whether `path` equals a reserved path or lies beneath one.
    ///
    /// Comparison is per segment: empty segments (leading, trailing or doubled
    /// slashes) are ignored, and `packaging` never matches `packages`.
    pub fn matches(&self, path: &str) -> bool {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        self.rules.iter().any(|rule| {
            segments.len() >= rule.segments.len()
                && rule
                    .segments
                    .iter()
                    .zip(&segments)
                    .all(|(expected, actual)| expected == actual)
        })
    }
}
