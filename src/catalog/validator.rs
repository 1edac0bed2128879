//! Startup validation of the slug table and route table.
//!
//! Errors are invariant violations that make URLs ambiguous or unreachable;
//! the server refuses to start on any of them. Warnings describe known
//! limitations worth surfacing in the logs.

use super::{Catalog, SEPARATOR};
use crate::i18n::Locale;
use crate::routing::RouteTable;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Path segments reserved by the router under `/{locale}/services/`.
const RESERVED_SERVICE_SLUGS: &[&str] = &["locations"];

/// Validation report containing errors and warnings about the tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

pub struct CatalogValidator;

static SLUG_REGEX: OnceLock<Regex> = OnceLock::new();
static ZIP_REGEX: OnceLock<Regex> = OnceLock::new();

impl CatalogValidator {
    /// Validate the catalog and the route table built from it.
    ///
    /// This function checks that:
    /// - every slug is lowercase ASCII words joined by hyphens
    /// - service slugs are unique within each locale and not reserved
    /// - area slugs are globally unique
    /// - every area has at least one well-formed zip code
    /// - no route slug is registered twice, or in both locales for different routes
    pub fn validate(catalog: &Catalog, routes: &RouteTable) -> ValidationReport {
        let mut report = ValidationReport::new();

        Self::check_services(catalog, &mut report);
        Self::check_areas(catalog, &mut report);
        Self::check_routes(routes, &mut report);

        report
    }

    fn check_services(catalog: &Catalog, report: &mut ValidationReport) {
        let mut keys = HashSet::new();
        for service in catalog.services() {
            if !keys.insert(service.key) {
                report
                    .errors
                    .push(format!("Duplicate service key {:?}", service.key));
            }
        }

        for locale in Locale::ALL {
            let mut seen: HashMap<&str, usize> = HashMap::new();
            for service in catalog.services() {
                let slug = service.slug.at(locale);
                *seen.entry(slug).or_default() += 1;

                if !Self::is_valid_slug(slug) {
                    report.errors.push(format!(
                        "Invalid {} slug '{}' for service {:?}",
                        locale, slug, service.key
                    ));
                }
                if RESERVED_SERVICE_SLUGS.contains(&slug) {
                    report.errors.push(format!(
                        "Service {:?} uses reserved {} slug '{}'",
                        service.key, locale, slug
                    ));
                }
                if service.name.at(locale).trim().is_empty() {
                    report
                        .errors
                        .push(format!("Service {:?} has no {} name", service.key, locale));
                }
            }

            let mut duplicates: Vec<_> = seen.into_iter().filter(|(_, n)| *n > 1).collect();
            duplicates.sort();
            for (slug, count) in duplicates {
                report.errors.push(format!(
                    "Service slug '{}' is used {} times in {}",
                    slug, count, locale
                ));
            }
        }
    }

    fn check_areas(catalog: &Catalog, report: &mut ValidationReport) {
        let mut seen = HashSet::new();
        for area in catalog.areas() {
            if !seen.insert(area.slug) {
                report
                    .errors
                    .push(format!("Duplicate area slug '{}'", area.slug));
            }
            if !Self::is_valid_slug(area.slug) {
                report.errors.push(format!("Invalid area slug '{}'", area.slug));
            }
            if area.zip_codes.is_empty() {
                report
                    .errors
                    .push(format!("Area '{}' has no zip codes", area.slug));
            }
            for zip in area.zip_codes {
                if !Self::is_valid_zip(zip) {
                    report
                        .errors
                        .push(format!("Area '{}' has invalid zip code '{}'", area.slug, zip));
                }
            }
            if area.slug.contains(SEPARATOR) {
                report.warnings.push(format!(
                    "Area slug '{}' contains '{}'; its local page slugs split at the first '{}' and will not resolve",
                    area.slug, SEPARATOR, SEPARATOR
                ));
            }
        }
    }

    fn check_routes(routes: &RouteTable, report: &mut ValidationReport) {
        let mut english = HashSet::new();
        let mut spanish = HashSet::new();
        for mapping in routes.mappings() {
            if !english.insert(mapping.en.as_str()) {
                report
                    .errors
                    .push(format!("Route slug '{}' registered twice in en", mapping.en));
            }
            if !spanish.insert(mapping.es.as_str()) {
                report
                    .errors
                    .push(format!("Route slug '{}' registered twice in es", mapping.es));
            }
            for slug in [&mapping.en, &mapping.es] {
                if !slug.split('/').all(Self::is_valid_slug) {
                    report.errors.push(format!("Invalid route slug '{}'", slug));
                }
            }
        }

        // A slug that is English for one route and Spanish for another breaks
        // en -> es -> en round trips.
        for mapping in routes.mappings() {
            if let Some(other) = routes.lookup(&mapping.en, Locale::Es) {
                if other != mapping {
                    report.errors.push(format!(
                        "Route slug '{}' is English for {:?} and Spanish for {:?}",
                        mapping.en, mapping.target, other.target
                    ));
                }
            }
        }
    }

    fn is_valid_slug(slug: &str) -> bool {
        let regex = SLUG_REGEX.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());
        regex.is_match(slug)
    }

    fn is_valid_zip(zip: &str) -> bool {
        let regex = ZIP_REGEX.get_or_init(|| Regex::new(r"^[0-9]{5}$").unwrap());
        regex.is_match(zip)
    }
}
