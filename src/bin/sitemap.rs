//! Sitemap binary - prints the XML sitemap to stdout
//!
//! Usage:
//!   cargo run --bin sitemap                 # Uses SITE_URL or the default origin
//!   cargo run --bin sitemap -- --check      # Also fails on catalog validation errors
//!
//! Optional environment variables:
//! - SITE_URL (defaults to https://www.magiccityair.com)

use anyhow::{Context, Result};
use hvac_site::catalog::{Catalog, CatalogValidator};
use hvac_site::config::Config;
use hvac_site::routing::RouteTable;
use hvac_site::sitemap::build_sitemap;
use tracing::{info, warn};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays valid XML
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hvac_site=info".parse()?),
        )
        .init();

    let check = std::env::args().any(|arg| arg == "--check");
    let config = Config::from_env()?;

    let catalog = Catalog::builtin();
    let routes = RouteTable::for_catalog(&catalog);

    let report = CatalogValidator::validate(&catalog, &routes);
    for warning in &report.warnings {
        warn!("{}", warning);
    }
    if check && report.has_errors() {
        anyhow::bail!("Catalog validation failed: {}", report.errors.join("; "));
    }

    let xml = build_sitemap(&catalog, &routes, &config.site_url)
        .context("Failed to build sitemap")?;
    info!("Generated sitemap for {}", config.site_url);

    println!("{}", xml);
    Ok(())
}
