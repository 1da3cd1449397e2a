//! Internationalization (i18n) module for multi-locale support.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales
//! - `locale`: Type-safe `Locale` that can only come from the registry
//! - `bundle`: Per-locale message bundles behind the `BundleLoader` port
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tour_guide_site::i18n::{BundleLoader, BundleStore, LocaleRegistry};
//!
//! let registry = Arc::new(LocaleRegistry::standard());
//! let bundles = BundleStore::embedded(&registry)?;
//!
//! let french = registry.get("fr").expect("registered");
//! let messages = bundles.load(french)?;
//! ```

mod bundle;
mod locale;
mod registry;

pub use bundle::{BundleError, BundleLoader, BundleStore, MessageBundle, MetaMessages, PageMessages};
pub use locale::Locale;
pub use registry::{LocaleConfig, LocaleRegistry, RegistryError};
