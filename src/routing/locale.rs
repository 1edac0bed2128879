//! Locale resolution from request paths.
//!
//! Paths look like `/{locale}/...rest`. A path without a locale prefix is
//! served in the default locale by rewriting it internally; the visitor never
//! sees a redirect.

use crate::i18n::Locale;

/// Paths under this prefix belong to ACME domain validation and are never rewritten.
pub const ACME_CHALLENGE_PREFIX: &str = "/.well-known/acme-challenge/";

/// Outcome of applying the locale rewrite to a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleRewrite {
    /// Reserved path; routed as-is without any locale handling
    Bypass,
    /// The path already starts with a locale prefix
    Prefixed(Locale),
    /// Internal rewrite target with the default locale prepended
    Rewrite(String),
}

/// Locale named by the path prefix, or the default locale when there is none.
///
/// Total over all inputs: an unrecognised path is not an error.
pub fn resolve_locale(path: &str) -> Locale {
    locale_prefix(path).unwrap_or(Locale::DEFAULT)
}

/// Locale prefix of `path`, if it has one.
///
/// Matches `/en` and `/en/...` but not `/english` or `/en-us`.
pub fn locale_prefix(path: &str) -> Option<Locale> {
    let rest = path.strip_prefix('/')?;
    let segment = rest.split('/').next().unwrap_or_default();
    Locale::from_code(segment)
}

/// Split a path into its locale prefix and the remainder.
///
/// The remainder has no leading or trailing slashes: `/es/services/` yields
/// `(Some(Es), "services")` and `/` yields `(None, "")`.
pub fn split_locale(path: &str) -> (Option<Locale>, &str) {
    match locale_prefix(path) {
        Some(locale) => {
            let rest = &path[1 + locale.code().len()..];
            (Some(locale), rest.trim_matches('/'))
        }
        None => (None, path.trim_matches('/')),
    }
}

/// Decide how the router should treat `path_and_query`.
///
/// Unprefixed paths get the default locale prepended; the query string, if
/// any, is carried over untouched.
pub fn rewrite_path(path_and_query: &str) -> LocaleRewrite {
    let (path, query) = match path_and_query.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (path_and_query, None),
    };

    if path.starts_with(ACME_CHALLENGE_PREFIX) {
        return LocaleRewrite::Bypass;
    }

    if let Some(locale) = locale_prefix(path) {
        return LocaleRewrite::Prefixed(locale);
    }

    let mut rewritten = Locale::DEFAULT.home_path();
    if path != "/" && !path.is_empty() {
        if !path.starts_with('/') {
            rewritten.push('/');
        }
        rewritten.push_str(path);
    }
    if let Some(query) = query {
        rewritten.push('?');
        rewritten.push_str(query);
    }

    LocaleRewrite::Rewrite(rewritten)
}
