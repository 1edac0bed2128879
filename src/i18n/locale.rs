//! Locale type: the two languages the site is published in.
//!
//! Every request is served in exactly one `Locale`, chosen once from the URL
//! prefix and never changed afterwards.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A site locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Es,
}

impl Locale {
    /// All locales, in the order pages are enumerated.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    /// Locale applied when a path carries no locale prefix.
    pub const DEFAULT: Locale = Locale::En;

    /// Parse a locale code.
    ///
    /// # Returns
    /// * `Some(Locale)` for `"en"` or `"es"` (exact, lowercase)
    /// * `None` for anything else
    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "en" => Some(Locale::En),
            "es" => Some(Locale::Es),
            _ => None,
        }
    }

    /// ISO 639-1 code used in URL prefixes (`"en"`, `"es"`).
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// The other site locale (target of the language switch link).
    pub fn other(self) -> Locale {
        match self {
            Locale::En => Locale::Es,
            Locale::Es => Locale::En,
        }
    }

    /// Path of this locale's home page (`/en`, `/es`).
    pub fn home_path(self) -> String {
        format!("/{}", self.code())
    }

    /// Full locale configuration from the registry.
    pub fn config(self) -> &'static LocaleConfig {
        LocaleRegistry::get().config(self)
    }

    /// English name of the language (e.g., "Spanish").
    pub fn name(self) -> &'static str {
        self.config().name
    }

    /// Native name of the language (e.g., "Español").
    pub fn native_name(self) -> &'static str {
        self.config().native_name
    }

    pub fn is_default(self) -> bool {
        self == Locale::DEFAULT
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A value that exists once per locale.
///
/// Lookups are total: every locale always has a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized<T> {
    pub en: T,
    pub es: T,
}

impl<T> Localized<T> {
    pub const fn new(en: T, es: T) -> Self {
        Self { en, es }
    }

    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::En => &self.en,
            Locale::Es => &self.es,
        }
    }
}

impl<T: Copy> Localized<T> {
    /// Copy out the value for `locale`.
    pub fn at(&self, locale: Locale) -> T {
        *self.get(locale)
    }
}
