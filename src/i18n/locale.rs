//! Locale type: a code that has been validated against the registry.

use std::fmt;

/// A registered locale.
///
/// Only the registry hands these out, so holding a `Locale` means the code
/// is part of the supported set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale {
    code: &'static str,
}

impl Locale {
    pub(super) fn new(code: &'static str) -> Self {
        Self { code }
    }

    /// Get the locale code (e.g., "en", "fr").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// URL prefix for this locale (e.g., "/fr").
    pub fn prefix(&self) -> String {
        format!("/{}", self.code)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        self.code
    }
}
