//! Locale registry: single source of truth for locale metadata.
//!
//! The registry is built once on first access with `OnceLock` and is
//! read-only afterwards, so it can be shared freely across request handlers.

use crate::i18n::strings::{ENGLISH_STRINGS, SPANISH_STRINGS};
use crate::i18n::{Locale, LocaleStrings};
use std::sync::OnceLock;

/// Configuration for a site locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    pub locale: Locale,

    /// ISO 639-1 language code (e.g., "en", "es")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Spanish")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Español")
    pub native_name: &'static str,

    /// BCP 47 tag used for `hreflang` alternates (e.g., "es-US")
    pub hreflang: &'static str,

    /// Localized user-facing strings
    pub strings: &'static LocaleStrings,
}

/// Global locale registry.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Configuration for a locale. Total: every `Locale` variant is registered.
    pub fn config(&self, locale: Locale) -> &LocaleConfig {
        // Registration order matches `Locale::ALL`.
        match locale {
            Locale::En => &self.locales[0],
            Locale::Es => &self.locales[1],
        }
    }
}

fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            locale: Locale::En,
            code: "en",
            name: "English",
            native_name: "English",
            hreflang: "en-US",
            strings: &ENGLISH_STRINGS,
        },
        LocaleConfig {
            locale: Locale::Es,
            code: "es",
            name: "Spanish",
            native_name: "Español",
            hreflang: "es-US",
            strings: &SPANISH_STRINGS,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_config_matches_locale() {
        let registry = LocaleRegistry::get();
        for locale in Locale::ALL {
            let config = registry.config(locale);
            assert_eq!(config.locale, locale);
            assert_eq!(config.code, locale.code());
        }
    }

    #[test]
    fn test_spanish_metadata() {
        let config = LocaleRegistry::get().config(Locale::Es);

        assert_eq!(config.name, "Spanish");
        assert_eq!(config.native_name, "Español");
        assert_eq!(config.hreflang, "es-US");
    }
}
