//! XML sitemap with `xhtml:link` language alternates.
//!
//! Lists every static page in both locales plus every local page the
//! resolver can serve. Enumerated compound slugs that do not resolve
//! (multi-token areas) are left out.

use crate::catalog::Catalog;
use crate::i18n::Locale;
use crate::routing::{PageResolver, RouteTable};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;
use thiserror::Error;

const NS_SITEMAP: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const NS_XHTML: &str = "http://www.w3.org/1999/xhtml";

#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("XML error: {0}")]
    Xml(String),
}

/// One `<url>` element: its location and the same page in every locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub loc: String,
    pub alternates: Vec<(Locale, String)>,
}

/// Collect sitemap entries, with absolute URLs under `site_url`.
pub fn sitemap_entries(resolver: &PageResolver<'_>, site_url: &str) -> Vec<SitemapEntry> {
    let site_url = site_url.trim_end_matches('/');
    let mut entries = Vec::new();

    for page in resolver.static_pages() {
        let alternates: Vec<(Locale, String)> = Locale::ALL
            .into_iter()
            .map(|locale| (locale, format!("{}{}", site_url, page.path(locale))))
            .collect();
        push_group(&mut entries, alternates);
    }

    // Enumeration yields each (area, service) in every locale consecutively.
    let compound: Vec<(Locale, String)> = resolver.enumerate_all_compound_slugs().collect();
    for group in compound.chunks(Locale::ALL.len()) {
        let alternates: Vec<(Locale, String)> = group
            .iter()
            .filter(|(locale, slug)| resolver.resolve_compound_slug(slug, *locale).is_ok())
            .map(|(locale, slug)| {
                let url = format!("{}{}/local/{}", site_url, locale.home_path(), slug);
                (*locale, url)
            })
            .collect();
        push_group(&mut entries, alternates);
    }

    entries
}

fn push_group(entries: &mut Vec<SitemapEntry>, alternates: Vec<(Locale, String)>) {
    for (_, loc) in &alternates {
        entries.push(SitemapEntry {
            loc: loc.clone(),
            alternates: alternates.clone(),
        });
    }
}

/// Render entries as a sitemap XML document.
pub fn render(entries: &[SitemapEntry]) -> Result<String, SitemapError> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    write(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("urlset");
    root.push_attribute(("xmlns", NS_SITEMAP));
    root.push_attribute(("xmlns:xhtml", NS_XHTML));
    write(&mut writer, Event::Start(root))?;

    for entry in entries {
        write(&mut writer, Event::Start(BytesStart::new("url")))?;

        write(&mut writer, Event::Start(BytesStart::new("loc")))?;
        write(&mut writer, Event::Text(BytesText::new(&entry.loc)))?;
        write(&mut writer, Event::End(BytesEnd::new("loc")))?;

        for (locale, href) in &entry.alternates {
            write_alternate(&mut writer, locale.config().hreflang, href)?;
        }
        if let Some((_, href)) = entry.alternates.iter().find(|(l, _)| l.is_default()) {
            write_alternate(&mut writer, "x-default", href)?;
        }

        write(&mut writer, Event::End(BytesEnd::new("url")))?;
    }

    write(&mut writer, Event::End(BytesEnd::new("urlset")))?;

    let result = writer.into_inner().into_inner();
    String::from_utf8(result).map_err(|e| SitemapError::Xml(e.to_string()))
}

/// Build the complete sitemap for `site_url`.
pub fn build_sitemap(
    catalog: &Catalog,
    routes: &RouteTable,
    site_url: &str,
) -> Result<String, SitemapError> {
    let resolver = PageResolver::new(catalog, routes);
    render(&sitemap_entries(&resolver, site_url))
}

fn write_alternate<W: std::io::Write>(
    writer: &mut Writer<W>,
    hreflang: &str,
    href: &str,
) -> Result<(), SitemapError> {
    let mut link = BytesStart::new("xhtml:link");
    link.push_attribute(("rel", "alternate"));
    link.push_attribute(("hreflang", hreflang));
    link.push_attribute(("href", href));
    write(writer, Event::Empty(link))
}

fn write<W: std::io::Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<(), SitemapError> {
    writer
        .write_event(event)
        .map_err(|e| SitemapError::Xml(e.to_string()))
}
