//! Route translation between locales.
//!
//! Most pages keep the same path in both locales and only swap the prefix.
//! Routes whose slug is translated (`/en/contact` ↔ `/es/contacto`) are listed
//! in a `RouteTable`, built once at startup from the named pages and the
//! service catalog.

use super::locale::split_locale;
use crate::catalog::{Catalog, ServiceKey};
use crate::i18n::{Locale, Localized};
use serde::Serialize;
use std::collections::HashMap;

/// Static pages with translated slugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamedRoute {
    About,
    Contact,
    Financing,
    MaintenancePlans,
    Reviews,
    PrivacyPolicy,
    ThankYou,
}

impl NamedRoute {
    pub const ALL: [NamedRoute; 7] = [
        NamedRoute::About,
        NamedRoute::Contact,
        NamedRoute::Financing,
        NamedRoute::MaintenancePlans,
        NamedRoute::Reviews,
        NamedRoute::PrivacyPolicy,
        NamedRoute::ThankYou,
    ];

    pub fn slug(self) -> Localized<&'static str> {
        match self {
            NamedRoute::About => Localized::new("about-us", "sobre-nosotros"),
            NamedRoute::Contact => Localized::new("contact", "contacto"),
            NamedRoute::Financing => Localized::new("financing", "financiamiento"),
            NamedRoute::MaintenancePlans => {
                Localized::new("maintenance-plans", "planes-de-mantenimiento")
            }
            NamedRoute::Reviews => Localized::new("reviews", "resenas"),
            NamedRoute::PrivacyPolicy => {
                Localized::new("privacy-policy", "politica-de-privacidad")
            }
            NamedRoute::ThankYou => Localized::new("thank-you", "gracias"),
        }
    }

    pub fn title(self) -> Localized<&'static str> {
        match self {
            NamedRoute::About => Localized::new("About Us", "Sobre Nosotros"),
            NamedRoute::Contact => Localized::new("Contact Us", "Contáctenos"),
            NamedRoute::Financing => Localized::new("Financing", "Financiamiento"),
            NamedRoute::MaintenancePlans => {
                Localized::new("Maintenance Plans", "Planes de Mantenimiento")
            }
            NamedRoute::Reviews => Localized::new("Customer Reviews", "Reseñas de Clientes"),
            NamedRoute::PrivacyPolicy => {
                Localized::new("Privacy Policy", "Política de Privacidad")
            }
            NamedRoute::ThankYou => Localized::new("Thank You", "Gracias"),
        }
    }
}

/// What a translated route points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    Named(NamedRoute),
    Service(ServiceKey),
}

/// One English ↔ Spanish route pair.
///
/// Slugs are paths relative to the locale prefix, without surrounding slashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMapping {
    pub en: String,
    pub es: String,
    pub target: RouteTarget,
}

impl RouteMapping {
    pub fn slug(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Es => &self.es,
        }
    }
}

pub struct RouteTable {
    mappings: Vec<RouteMapping>,
    /// English slug -> mapping
    forward: HashMap<String, usize>,
    /// Spanish slug -> mapping
    reverse: HashMap<String, usize>,
}

impl RouteTable {
    pub fn new(mappings: Vec<RouteMapping>) -> Self {
        let mut forward = HashMap::new();
        let mut reverse = HashMap::new();
        for (idx, mapping) in mappings.iter().enumerate() {
            forward.entry(mapping.en.clone()).or_insert(idx);
            reverse.entry(mapping.es.clone()).or_insert(idx);
        }

        Self {
            mappings,
            forward,
            reverse,
        }
    }

    /// Named pages plus one `services/{slug}` pair per catalog service.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        let named = NamedRoute::ALL.into_iter().map(|route| RouteMapping {
            en: route.slug().en.to_string(),
            es: route.slug().es.to_string(),
            target: RouteTarget::Named(route),
        });

        let services = catalog.services().iter().map(|service| RouteMapping {
            en: format!("services/{}", service.slug.en),
            es: format!("services/{}", service.slug.es),
            target: RouteTarget::Service(service.key),
        });

        Self::new(named.chain(services).collect())
    }

    pub fn mappings(&self) -> &[RouteMapping] {
        &self.mappings
    }

    /// Mapping whose `locale` slug is exactly `slug`.
    pub fn lookup(&self, slug: &str, locale: Locale) -> Option<&RouteMapping> {
        let index = match locale {
            Locale::En => &self.forward,
            Locale::Es => &self.reverse,
        };
        index.get(slug).map(|&idx| &self.mappings[idx])
    }

    /// Named page registered under `slug` in `locale`.
    pub fn named_route(&self, slug: &str, locale: Locale) -> Option<NamedRoute> {
        match self.lookup(slug, locale)?.target {
            RouteTarget::Named(route) => Some(route),
            RouteTarget::Service(_) => None,
        }
    }

    /// Equivalent of `path` in locale `to`, for language switch links.
    ///
    /// The `from` prefix is replaced by `to`. A remainder registered as a
    /// `from` slug is swapped for its `to` slug; one that is already a `to`
    /// slug is kept; anything else is carried over unchanged. An unprefixed
    /// path is treated as the remainder itself. Query strings and fragments
    /// are preserved.
    pub fn translate(&self, path: &str, from: Locale, to: Locale) -> String {
        if from == to {
            return path.to_string();
        }

        let (path_part, suffix) = match path.find(['?', '#']) {
            Some(idx) => path.split_at(idx),
            None => (path, ""),
        };
        let (_, rest) = split_locale(path_part);

        let translated = match self.lookup(rest, from) {
            Some(mapping) => mapping.slug(to),
            None => rest,
        };

        let mut out = to.home_path();
        if !translated.is_empty() {
            out.push('/');
            out.push_str(translated);
        }
        out.push_str(suffix);
        out
    }

    /// Whether `route` is a registered translated route in `lang`.
    ///
    /// Only the static table is consulted: compound local pages are never
    /// registered here and always report `false`. The home page exists in
    /// every locale.
    pub fn route_exists_for_language(&self, route: &str, lang: Locale) -> bool {
        let path = route.split(['?', '#']).next().unwrap_or_default();
        let (_, rest) = split_locale(path);
        rest.is_empty() || self.lookup(rest, lang).is_some()
    }
}
