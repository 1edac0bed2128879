//! Bilingual routing: locale detection, route translation and page resolution.

mod locale;
mod page;
mod translator;

pub use locale::{
    locale_prefix, resolve_locale, rewrite_path, split_locale, LocaleRewrite,
    ACME_CHALLENGE_PREFIX,
};
pub use page::{compound_slug, Page, PageData, PageResolver};
pub use translator::{NamedRoute, RouteMapping, RouteTable, RouteTarget};
