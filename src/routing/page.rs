//! Page resolution: (locale, path) to the page it names.
//!
//! Resolution is a pure function of its inputs and the static tables.

use super::translator::{NamedRoute, RouteTable};
use crate::catalog::{Catalog, NotFound, ServiceAreaDefinition, ServiceDefinition, SEPARATOR};
use crate::i18n::Locale;

/// A local landing page: one service offered in one area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageData<'a> {
    pub area: &'a ServiceAreaDefinition,
    pub service: &'a ServiceDefinition,
    pub locale: Locale,
}

impl PageData<'_> {
    /// Compound slug of this page in `locale`.
    pub fn compound_slug(&self, locale: Locale) -> String {
        compound_slug(self.area, self.service, locale)
    }
}

/// A resolved page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page<'a> {
    Home,
    Named(NamedRoute),
    Services,
    Service(&'a ServiceDefinition),
    Locations,
    Area(&'a ServiceAreaDefinition),
    Local(PageData<'a>),
}

impl Page<'_> {
    /// Canonical path of this page in `locale`.
    pub fn path(&self, locale: Locale) -> String {
        let home = locale.home_path();
        match self {
            Page::Home => home,
            Page::Named(route) => format!("{}/{}", home, route.slug().at(locale)),
            Page::Services => format!("{}/services", home),
            Page::Service(service) => format!("{}/services/{}", home, service.slug.at(locale)),
            Page::Locations => format!("{}/services/locations", home),
            Page::Area(area) => format!("{}/services/locations/{}", home, area.slug),
            Page::Local(data) => format!("{}/local/{}", home, data.compound_slug(locale)),
        }
    }

    /// Short machine-readable name of the page kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Named(_) => "named",
            Page::Services => "services",
            Page::Service(_) => "service",
            Page::Locations => "locations",
            Page::Area(_) => "area",
            Page::Local(_) => "local",
        }
    }
}

pub fn compound_slug(
    area: &ServiceAreaDefinition,
    service: &ServiceDefinition,
    locale: Locale,
) -> String {
    format!("{}{}{}", area.slug, SEPARATOR, service.slug.at(locale))
}

pub struct PageResolver<'a> {
    catalog: &'a Catalog,
    routes: &'a RouteTable,
}

impl<'a> PageResolver<'a> {
    pub fn new(catalog: &'a Catalog, routes: &'a RouteTable) -> Self {
        Self { catalog, routes }
    }

    pub fn resolve_simple_slug(
        &self,
        slug: &str,
        locale: Locale,
    ) -> Result<&'a ServiceDefinition, NotFound> {
        self.catalog.resolve_simple_slug(slug, locale)
    }

    pub fn resolve_area(&self, slug: &str) -> Result<&'a ServiceAreaDefinition, NotFound> {
        self.catalog.resolve_area(slug)
    }

    /// Resolve `{area}-{service}` in `locale`.
    ///
    /// The slug is split at its FIRST separator: the first token is the area,
    /// the remainder is the service. Area slugs that themselves contain the
    /// separator (`mountain-brook`) therefore never resolve here.
    pub fn resolve_compound_slug(
        &self,
        compound: &str,
        locale: Locale,
    ) -> Result<PageData<'a>, NotFound> {
        let (area_slug, service_slug) = match compound.split_once(SEPARATOR) {
            Some(parts) => parts,
            None => return Err(NotFound::Area(compound.to_string())),
        };

        let area = self.resolve_area(area_slug)?;
        let service = self.catalog.resolve_simple_slug(service_slug, locale)?;

        Ok(PageData {
            area,
            service,
            locale,
        })
    }

    /// Every (locale, compound slug) pair: areas × services × locales.
    ///
    /// Area-major, then service, then locale. A fresh iterator is returned on
    /// each call.
    pub fn enumerate_all_compound_slugs(&self) -> impl Iterator<Item = (Locale, String)> + 'a {
        let services = self.catalog.services();
        self.catalog.areas().iter().flat_map(move |area| {
            services.iter().flat_map(move |service| {
                Locale::ALL
                    .into_iter()
                    .map(move |locale| (locale, compound_slug(area, service, locale)))
            })
        })
    }

    /// Resolve the path remainder after the locale prefix.
    pub fn resolve_path(&self, locale: Locale, rest: &str) -> Result<Page<'a>, NotFound> {
        let rest = rest.trim_matches('/');
        let segments: Vec<&str> = rest.split('/').collect();

        let page = match segments.as_slice() {
            [""] => Page::Home,
            ["services"] => Page::Services,
            ["services", "locations"] => Page::Locations,
            ["services", "locations", area] => Page::Area(self.resolve_area(area)?),
            ["services", slug] => Page::Service(self.resolve_simple_slug(slug, locale)?),
            ["local", compound] => Page::Local(self.resolve_compound_slug(compound, locale)?),
            _ => match self.routes.named_route(rest, locale) {
                Some(route) => Page::Named(route),
                None => return Err(NotFound::Page(rest.to_string())),
            },
        };

        Ok(page)
    }

    /// Every non-compound page of the site, locale-independent.
    pub fn static_pages(&self) -> Vec<Page<'a>> {
        let mut pages = vec![Page::Home];
        pages.extend(NamedRoute::ALL.into_iter().map(Page::Named));
        pages.push(Page::Services);
        pages.extend(self.catalog.services().iter().map(Page::Service));
        pages.push(Page::Locations);
        pages.extend(self.catalog.areas().iter().map(Page::Area));
        pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ServiceKey;
    use proptest::prelude::*;
    use std::collections::HashSet;

    struct Fixture {
        catalog: Catalog,
        routes: RouteTable,
    }

    impl Fixture {
        fn new() -> Self {
            let catalog = Catalog::builtin();
            let routes = RouteTable::for_catalog(&catalog);
            Self { catalog, routes }
        }

        fn resolver(&self) -> PageResolver<'_> {
            PageResolver::new(&self.catalog, &self.routes)
        }
    }

    // ==================== Compound Slug Scenario Tests ====================

    #[test]
    fn test_birmingham_ac_repair_english() {
        let fixture = Fixture::new();
        let data = fixture
            .resolver()
            .resolve_compound_slug("birmingham-ac-repair", Locale::En)
            .unwrap();

        assert_eq!(data.area.name, "Birmingham");
        assert_eq!(data.service.name.en, "AC Repair");
        assert_eq!(data.locale, Locale::En);
    }

    #[test]
    fn test_hoover_ac_repair_spanish() {
        let fixture = Fixture::new();
        let data = fixture
            .resolver()
            .resolve_compound_slug("hoover-reparacion-aire-acondicionado", Locale::Es)
            .unwrap();

        assert_eq!(data.area.name, "Hoover");
        assert_eq!(data.service.name.es, "Reparación de Aire Acondicionado");
        assert_eq!(data.locale, Locale::Es);
    }

    #[test]
    fn test_nonexistent_area_not_found() {
        let fixture = Fixture::new();
        for locale in Locale::ALL {
            assert_eq!(
                fixture
                    .resolver()
                    .resolve_compound_slug("nonexistent-area-xyz", locale),
                Err(NotFound::Area("nonexistent".to_string()))
            );
        }
    }

    #[test]
    fn test_compound_service_in_wrong_locale() {
        let fixture = Fixture::new();
        assert_eq!(
            fixture
                .resolver()
                .resolve_compound_slug("birmingham-ac-repair", Locale::Es),
            Err(NotFound::Service {
                slug: "ac-repair".to_string(),
                locale: Locale::Es,
            })
        );
    }

    #[test]
    fn test_compound_without_separator() {
        let fixture = Fixture::new();
        assert_eq!(
            fixture.resolver().resolve_compound_slug("birmingham", Locale::En),
            Err(NotFound::Area("birmingham".to_string()))
        );
    }

    #[test]
    fn test_compound_is_case_sensitive() {
        let fixture = Fixture::new();
        assert!(fixture
            .resolver()
            .resolve_compound_slug("Birmingham-ac-repair", Locale::En)
            .is_err());
    }

    // ==================== Multi-Token Area Tests ====================
    //
    // Splitting at the first separator means multi-token area slugs are cut
    // short. These tests pin the current resolution for every such area.

    #[test]
    fn test_multi_token_areas_are_exactly_the_known_ones() {
        let fixture = Fixture::new();
        let multi: Vec<_> = fixture
            .catalog
            .areas()
            .iter()
            .filter(|area| area.slug.contains(SEPARATOR))
            .map(|area| area.slug)
            .collect();
        assert_eq!(multi, vec!["vestavia-hills", "mountain-brook", "center-point"]);
    }

    #[test]
    fn test_vestavia_hills_compound_does_not_resolve() {
        let fixture = Fixture::new();
        assert_eq!(
            fixture
                .resolver()
                .resolve_compound_slug("vestavia-hills-ac-repair", Locale::En),
            Err(NotFound::Area("vestavia".to_string()))
        );
    }

    #[test]
    fn test_mountain_brook_compound_does_not_resolve() {
        let fixture = Fixture::new();
        assert_eq!(
            fixture
                .resolver()
                .resolve_compound_slug("mountain-brook-reparacion-calefaccion", Locale::Es),
            Err(NotFound::Area("mountain".to_string()))
        );
    }

    #[test]
    fn test_center_point_compound_does_not_resolve() {
        let fixture = Fixture::new();
        assert_eq!(
            fixture
                .resolver()
                .resolve_compound_slug("center-point-ductwork", Locale::En),
            Err(NotFound::Area("center".to_string()))
        );
    }

    #[test]
    fn test_every_multi_token_area_compound_is_not_found() {
        let fixture = Fixture::new();
        let resolver = fixture.resolver();
        for area in fixture.catalog.areas() {
            if !area.slug.contains(SEPARATOR) {
                continue;
            }
            for service in fixture.catalog.services() {
                for locale in Locale::ALL {
                    let slug = compound_slug(area, service, locale);
                    assert!(
                        matches!(
                            resolver.resolve_compound_slug(&slug, locale),
                            Err(NotFound::Area(_))
                        ),
                        "{} unexpectedly resolved",
                        slug
                    );
                }
            }
        }
    }

    // ==================== Resolution Law Tests ====================

    #[test]
    fn test_single_token_areas_resolve_with_every_service() {
        let fixture = Fixture::new();
        let resolver = fixture.resolver();
        for area in fixture.catalog.areas() {
            if area.slug.contains(SEPARATOR) {
                continue;
            }
            for service in fixture.catalog.services() {
                for locale in Locale::ALL {
                    let slug = compound_slug(area, service, locale);
                    let data = resolver.resolve_compound_slug(&slug, locale).unwrap();
                    assert_eq!(data.area, area);
                    assert_eq!(data.service, service);
                    assert_eq!(data.compound_slug(locale), slug);
                }
            }
        }
    }

    proptest! {
        #[test]
        fn prop_compound_resolution_never_panics(slug in ".*") {
            let fixture = Fixture::new();
            for locale in Locale::ALL {
                let _ = fixture.resolver().resolve_compound_slug(&slug, locale);
            }
        }
    }

    // ==================== Enumeration Tests ====================

    #[test]
    fn test_enumeration_is_complete_and_unique() {
        let fixture = Fixture::new();
        let all: Vec<_> = fixture.resolver().enumerate_all_compound_slugs().collect();
        let expected = fixture.catalog.areas().len() * fixture.catalog.services().len() * 2;

        assert_eq!(all.len(), expected);
        let unique: HashSet<_> = all.iter().cloned().collect();
        assert_eq!(unique.len(), expected);
    }

    #[test]
    fn test_enumeration_is_restartable() {
        let fixture = Fixture::new();
        let resolver = fixture.resolver();
        let first: Vec<_> = resolver.enumerate_all_compound_slugs().collect();
        let second: Vec<_> = resolver.enumerate_all_compound_slugs().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_enumeration_contains_scenarios() {
        let fixture = Fixture::new();
        let all: HashSet<_> = fixture.resolver().enumerate_all_compound_slugs().collect();
        assert!(all.contains(&(Locale::En, "birmingham-ac-repair".to_string())));
        assert!(all.contains(&(
            Locale::Es,
            "hoover-reparacion-aire-acondicionado".to_string()
        )));
    }

    // ==================== resolve_path Tests ====================

    #[test]
    fn test_resolve_path_home() {
        let fixture = Fixture::new();
        assert_eq!(fixture.resolver().resolve_path(Locale::Es, ""), Ok(Page::Home));
        assert_eq!(fixture.resolver().resolve_path(Locale::En, "/"), Ok(Page::Home));
    }

    #[test]
    fn test_resolve_path_indexes() {
        let fixture = Fixture::new();
        let resolver = fixture.resolver();
        assert_eq!(resolver.resolve_path(Locale::En, "services"), Ok(Page::Services));
        assert_eq!(
            resolver.resolve_path(Locale::Es, "services/locations"),
            Ok(Page::Locations)
        );
    }

    #[test]
    fn test_resolve_path_service() {
        let fixture = Fixture::new();
        let page = fixture
            .resolver()
            .resolve_path(Locale::Es, "services/reparacion-mismo-dia")
            .unwrap();
        match page {
            Page::Service(service) => assert_eq!(service.key, ServiceKey::SameDayRepair),
            other => panic!("unexpected page {:?}", other),
        }
    }

    #[test]
    fn test_resolve_path_area_is_locale_independent() {
        let fixture = Fixture::new();
        let resolver = fixture.resolver();
        for locale in Locale::ALL {
            let page = resolver
                .resolve_path(locale, "services/locations/mountain-brook")
                .unwrap();
            assert_eq!(page.kind(), "area");
        }
    }

    #[test]
    fn test_resolve_path_named() {
        let fixture = Fixture::new();
        let resolver = fixture.resolver();
        assert_eq!(
            resolver.resolve_path(Locale::En, "contact"),
            Ok(Page::Named(NamedRoute::Contact))
        );
        assert_eq!(
            resolver.resolve_path(Locale::Es, "contacto"),
            Ok(Page::Named(NamedRoute::Contact))
        );
        assert_eq!(
            resolver.resolve_path(Locale::Es, "contact"),
            Err(NotFound::Page("contact".to_string()))
        );
    }

    #[test]
    fn test_resolve_path_local() {
        let fixture = Fixture::new();
        let page = fixture
            .resolver()
            .resolve_path(Locale::En, "local/homewood-hvac-maintenance")
            .unwrap();
        assert_eq!(page.kind(), "local");
    }

    #[test]
    fn test_resolve_path_unknown() {
        let fixture = Fixture::new();
        let resolver = fixture.resolver();
        assert!(resolver.resolve_path(Locale::En, "nonexistent-area-xyz").is_err());
        assert!(resolver.resolve_path(Locale::En, "local").is_err());
        assert!(resolver.resolve_path(Locale::En, "services/locations/hoover/extra").is_err());
    }

    // ==================== Page Path Tests ====================

    #[test]
    fn test_page_paths_resolve_back() {
        let fixture = Fixture::new();
        let resolver = fixture.resolver();
        for page in resolver.static_pages() {
            for locale in Locale::ALL {
                let path = page.path(locale);
                let (prefix, rest) = crate::routing::split_locale(&path);
                assert_eq!(prefix, Some(locale));
                assert_eq!(resolver.resolve_path(locale, rest), Ok(page), "{}", path);
            }
        }
    }

    #[test]
    fn test_local_page_path_switches_service_slug() {
        let fixture = Fixture::new();
        let data = fixture
            .resolver()
            .resolve_compound_slug("pelham-heating-repair", Locale::En)
            .unwrap();
        assert_eq!(
            Page::Local(data).path(Locale::Es),
            "/es/local/pelham-reparacion-calefaccion"
        );
    }
}
