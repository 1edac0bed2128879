//! Slug table: the static registry of services and service areas.
//!
//! A `Catalog` is built once at startup and shared read-only (behind an `Arc`)
//! by every request handler. Lookups are exact and case-sensitive.

mod areas;
mod services;
mod validator;

use crate::i18n::{Locale, Localized};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

pub use areas::AREAS;
pub use services::SERVICES;
pub use validator::{CatalogValidator, ValidationReport};

/// Separator joining an area slug and a service slug into a compound slug.
pub const SEPARATOR: char = '-';

/// Stable internal identity of a service, independent of locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ServiceKey {
    AcRepair,
    HeatingRepair,
    HvacInstallation,
    HvacMaintenance,
    SameDayRepair,
    EmergencyService,
    HeatPumpServices,
    IndoorAirQuality,
    DuctworkServices,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDefinition {
    pub key: ServiceKey,
    pub name: Localized<&'static str>,
    /// URL slug; unique within each locale
    pub slug: Localized<&'static str>,
    pub description: Localized<&'static str>,
    pub image: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceAreaDefinition {
    /// Locale-independent URL slug; globally unique
    pub slug: &'static str,
    pub name: &'static str,
    pub zip_codes: &'static [&'static str],
    pub landmarks: &'static [&'static str],
}

/// A slug or path that does not resolve to any page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFound {
    #[error("no service area with slug '{0}'")]
    Area(String),

    #[error("no service with {locale} slug '{slug}'")]
    Service { slug: String, locale: Locale },

    #[error("no page at '{0}'")]
    Page(String),
}

pub struct Catalog {
    services: Vec<ServiceDefinition>,
    areas: Vec<ServiceAreaDefinition>,
    service_index: HashMap<(Locale, &'static str), usize>,
    area_index: HashMap<&'static str, usize>,
}

impl Catalog {
    /// Build a catalog and its lookup indexes.
    ///
    /// When two entries share a slug the first one wins; `CatalogValidator`
    /// reports such collisions as errors.
    pub fn new(services: Vec<ServiceDefinition>, areas: Vec<ServiceAreaDefinition>) -> Self {
        let mut service_index = HashMap::new();
        for (idx, service) in services.iter().enumerate() {
            for locale in Locale::ALL {
                service_index
                    .entry((locale, service.slug.at(locale)))
                    .or_insert(idx);
            }
        }

        let mut area_index = HashMap::new();
        for (idx, area) in areas.iter().enumerate() {
            area_index.entry(area.slug).or_insert(idx);
        }

        Self {
            services,
            areas,
            service_index,
            area_index,
        }
    }

    /// The catalog of services and areas the business actually offers.
    pub fn builtin() -> Self {
        Self::new(SERVICES.to_vec(), AREAS.to_vec())
    }

    pub fn services(&self) -> &[ServiceDefinition] {
        &self.services
    }

    pub fn areas(&self) -> &[ServiceAreaDefinition] {
        &self.areas
    }

    pub fn service(&self, key: ServiceKey) -> Option<&ServiceDefinition> {
        self.services.iter().find(|service| service.key == key)
    }

    /// Look up a service by its slug in `locale`.
    pub fn resolve_simple_slug(
        &self,
        slug: &str,
        locale: Locale,
    ) -> Result<&ServiceDefinition, NotFound> {
        self.service_index
            .get(&(locale, slug))
            .map(|&idx| &self.services[idx])
            .ok_or_else(|| NotFound::Service {
                slug: slug.to_string(),
                locale,
            })
    }

    /// Look up a service area by its (locale-independent) slug.
    pub fn resolve_area(&self, slug: &str) -> Result<&ServiceAreaDefinition, NotFound> {
        self.area_index
            .get(slug)
            .map(|&idx| &self.areas[idx])
            .ok_or_else(|| NotFound::Area(slug.to_string()))
    }

    /// All areas that list `zip` among their zip codes.
    ///
    /// Neighbouring cities can share a zip code, so more than one area may match.
    /// Anything other than exactly five ASCII digits matches nothing.
    pub fn areas_for_zip(&self, zip: &str) -> Vec<&ServiceAreaDefinition> {
        let zip = zip.trim();
        if zip.len() != 5 || !zip.bytes().all(|b| b.is_ascii_digit()) {
            return Vec::new();
        }

        self.areas
            .iter()
            .filter(|area| area.zip_codes.contains(&zip))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
