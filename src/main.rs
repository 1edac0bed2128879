use anyhow::{Context, Result};
use hvac_site::catalog::{Catalog, CatalogValidator};
use hvac_site::config::Config;
use hvac_site::mailer;
use hvac_site::server::{build_router, AppState};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hvac_site=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!("Starting HVAC site server");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Lead delivery
    let sink = mailer::sink_from_config(&config)?;
    if config.mail_api_key.is_none() {
        warn!("MAIL_API_KEY not set, leads will only be logged");
    }
    if config.admin_api_key.is_none() {
        warn!("ADMIN_API_KEY not set, /admin/metrics is disabled");
    }

    let port = config.port;
    let state = AppState::new(config, Catalog::builtin(), sink);

    // Validate slug and route tables before accepting traffic
    let report = CatalogValidator::validate(&state.catalog, &state.routes);
    for warning in &report.warnings {
        warn!("{}", warning);
    }
    if report.has_errors() {
        for error in &report.errors {
            tracing::error!("{}", error);
        }
        anyhow::bail!("Catalog validation failed with {} error(s)", report.errors.len());
    }
    info!(
        "Catalog loaded: {} services, {} areas, {} routes",
        state.catalog.services().len(),
        state.catalog.areas().len(),
        state.routes.mappings().len()
    );

    let router = build_router(Arc::new(state));

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, router)
        .await
        .context("Server error")?;

    Ok(())
}
