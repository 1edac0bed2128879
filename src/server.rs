//! HTTP surface: locale-prefixed pages, the contact API and supporting endpoints.
//!
//! Unprefixed page paths never match a route directly. They fall through to
//! a fallback that prepends the default locale and forwards the request to
//! the same router, so `/contact` is served as `/en/contact` without a
//! redirect and the visitor's URL stays unchanged.

use crate::catalog::{Catalog, ServiceAreaDefinition};
use crate::config::Config;
use crate::contact::{process_submission, ContactError, ContactSubmission, Field, LeadSink};
use crate::i18n::Locale;
use crate::metrics::{LeadMetrics, MetricsReport};
use crate::routing::{
    resolve_locale, rewrite_path, split_locale, LocaleRewrite, Page, PageResolver, RouteTable,
};
use crate::savings::{savings_table, SavingsRow};
use crate::security;
use crate::sitemap::build_sitemap;
use axum::{
    body::Body,
    extract::{rejection::JsonRejection, OriginalUri, Path, Query, Request, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceExt;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

/// Shared, read-only server state.
pub struct AppState {
    pub config: Config,
    pub catalog: Catalog,
    pub routes: RouteTable,
    pub sink: Box<dyn LeadSink>,
    pub metrics: LeadMetrics,
    started_at: Instant,
}

impl AppState {
    pub fn new(config: Config, catalog: Catalog, sink: Box<dyn LeadSink>) -> Self {
        let routes = RouteTable::for_catalog(&catalog);
        Self {
            config,
            catalog,
            routes,
            sink,
            metrics: LeadMetrics::new(),
            started_at: Instant::now(),
        }
    }

    pub fn resolver(&self) -> PageResolver<'_> {
        PageResolver::new(&self.catalog, &self.routes)
    }
}

type SharedState = Arc<AppState>;

// ==================== Errors ====================

/// Error returned by the JSON API endpoints.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized,
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            ApiError::Internal(message) => {
                error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        let body = serde_json::json!({
            "success": false,
            "error": message,
        });
        (status, Json(body)).into_response()
    }
}

// ==================== Router ====================

pub fn build_router(state: SharedState) -> Router {
    let mut site = Router::new()
        .route("/health", get(health))
        .route("/sitemap.xml", get(sitemap))
        .route("/api/contact", post(contact))
        .route("/api/service-areas/lookup", get(zip_lookup))
        .route("/api/energy-savings", get(energy_savings))
        .route("/admin/metrics", get(admin_metrics))
        .route("/.well-known/acme-challenge/:token", get(acme_challenge));

    for locale in Locale::ALL {
        let home = locale.home_path();
        site = site
            .route(&home, get(page))
            .route(&format!("{}/", home), get(page))
            .route(&format!("{}/*rest", home), get(page));
    }

    let site = site.with_state(Arc::clone(&state));

    let forwarder = site.clone();
    site.fallback(move |req: Request| {
        let svc = forwarder.clone();
        let state = Arc::clone(&state);
        async move { rewrite_or_not_found(svc, &state, req).await }
    })
    .layer(TraceLayer::new_for_http())
}

async fn rewrite_or_not_found(svc: Router, state: &AppState, req: Request) -> Response {
    let path_and_query = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| "/".to_string());
    let readable = matches!(*req.method(), Method::GET | Method::HEAD);

    if let LocaleRewrite::Rewrite(target) = rewrite_path(&path_and_query) {
        if readable {
            if let Ok(uri) = target.parse::<Uri>() {
                debug!("Rewriting {} -> {}", path_and_query, target);
                let (mut parts, body) = req.into_parts();
                parts.uri = uri;
                return svc
                    .oneshot(Request::from_parts(parts, body))
                    .await
                    .into_response();
            }
        }
    }

    let path = req.uri().path();
    not_found(&state.routes, resolve_locale(path), path)
}

// ==================== Pages ====================

/// Language switch link.
#[derive(Debug, Serialize)]
struct Link {
    locale: Locale,
    /// Language name in that language, e.g. "Español"
    language: &'static str,
    label: &'static str,
    href: String,
}

impl Link {
    fn new(locale: Locale, href: String) -> Self {
        Self {
            locale,
            language: locale.native_name(),
            label: locale.config().strings.language_switch,
            href,
        }
    }
}

#[derive(Debug, Serialize)]
struct PageView {
    site_name: &'static str,
    locale: Locale,
    kind: &'static str,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<&'static str>,
    #[serde(skip_serializing_if = "<[&str]>::is_empty")]
    landmarks: &'static [&'static str],
    /// Canonical path of the page
    path: String,
    /// Path as the visitor requested it, before any internal rewrite
    request_path: String,
    alternate: Link,
}

#[derive(Debug, Serialize)]
struct NotFoundView {
    locale: Locale,
    title: &'static str,
    message: &'static str,
    request_path: String,
    home: HomeLink,
    alternate: Link,
}

#[derive(Debug, Serialize)]
struct HomeLink {
    label: &'static str,
    href: String,
}

async fn page(
    State(state): State<SharedState>,
    OriginalUri(original): OriginalUri,
    uri: Uri,
) -> Response {
    let (prefix, rest) = split_locale(uri.path());
    let locale = prefix.unwrap_or_default();

    match state.resolver().resolve_path(locale, rest) {
        Ok(page) => {
            let other = locale.other();
            let view = PageView {
                site_name: locale.config().strings.site_name,
                locale,
                kind: page.kind(),
                title: page_title(&page, locale),
                description: page_description(&page, locale),
                image: page_image(&page),
                landmarks: page_landmarks(&page),
                path: page.path(locale),
                request_path: original.path().to_string(),
                alternate: Link::new(other, page.path(other)),
            };
            Json(view).into_response()
        }
        Err(e) => {
            debug!("{} ({})", e, original.path());
            not_found(&state.routes, locale, original.path())
        }
    }
}

fn page_title(page: &Page<'_>, locale: Locale) -> String {
    let strings = locale.config().strings;
    match page {
        Page::Home => strings.home_title.to_string(),
        Page::Named(route) => route.title().at(locale).to_string(),
        Page::Services => strings.services_title.to_string(),
        Page::Service(service) => service.name.at(locale).to_string(),
        Page::Locations => strings.locations_title.to_string(),
        Page::Area(area) => strings.area_title(area.name),
        Page::Local(data) => strings.local_title(data.service.name.at(locale), data.area.name),
    }
}

fn page_description(page: &Page<'_>, locale: Locale) -> Option<&'static str> {
    match page {
        Page::Service(service) => Some(service.description.at(locale)),
        Page::Local(data) => Some(data.service.description.at(locale)),
        _ => None,
    }
}

fn page_image(page: &Page<'_>) -> Option<&'static str> {
    match page {
        Page::Service(service) => service.image,
        Page::Local(data) => data.service.image,
        _ => None,
    }
}

fn page_landmarks(page: &Page<'_>) -> &'static [&'static str] {
    match page {
        Page::Area(area) => area.landmarks,
        Page::Local(data) => data.area.landmarks,
        _ => &[],
    }
}

/// Localized not-found view linking back to the locale's home page.
fn not_found(routes: &RouteTable, locale: Locale, request_path: &str) -> Response {
    let strings = locale.config().strings;
    let other = locale.other();
    let view = NotFoundView {
        locale,
        title: strings.not_found_title,
        message: strings.not_found_message,
        request_path: request_path.to_string(),
        home: HomeLink {
            label: strings.back_home,
            href: locale.home_path(),
        },
        alternate: Link::new(other, routes.translate(request_path, locale, other)),
    };
    (StatusCode::NOT_FOUND, Json(view)).into_response()
}

// ==================== Contact ====================

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<Field>,
}

async fn contact(
    State(state): State<SharedState>,
    body: Result<Json<ContactSubmission>, JsonRejection>,
) -> (StatusCode, Json<ContactResponse>) {
    let submission = match body {
        Ok(Json(submission)) => submission,
        Err(rejection) => {
            // The locale is unknown until the body parses.
            state.metrics.record_received();
            state.metrics.record_rejected();
            warn!("Malformed contact submission: {}", rejection.body_text());
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ContactResponse {
                    success: false,
                    message: Locale::DEFAULT.config().strings.contact_failure.to_string(),
                    missing: Vec::new(),
                }),
            );
        }
    };

    let locale = submission.locale();
    let strings = locale.config().strings;

    match process_submission(state.sink.as_ref(), &state.metrics, submission).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ContactResponse {
                success: true,
                message: strings.contact_success.to_string(),
                missing: Vec::new(),
            }),
        ),
        Err(ContactError::Validation(e)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ContactResponse {
                success: false,
                message: e.message(locale),
                missing: e.missing,
            }),
        ),
        Err(ContactError::Delivery(_)) => (
            StatusCode::BAD_GATEWAY,
            Json(ContactResponse {
                success: false,
                message: strings.contact_failure.to_string(),
                missing: Vec::new(),
            }),
        ),
    }
}

// ==================== Service Areas ====================

#[derive(Debug, Deserialize)]
struct ZipQuery {
    zip: Option<String>,
}

#[derive(Debug, Serialize)]
struct AreaSummary {
    slug: &'static str,
    name: &'static str,
}

impl From<&ServiceAreaDefinition> for AreaSummary {
    fn from(area: &ServiceAreaDefinition) -> Self {
        Self {
            slug: area.slug,
            name: area.name,
        }
    }
}

#[derive(Debug, Serialize)]
struct ZipLookupResponse {
    zip: String,
    served: bool,
    areas: Vec<AreaSummary>,
}

async fn zip_lookup(
    State(state): State<SharedState>,
    Query(query): Query<ZipQuery>,
) -> Result<Json<ZipLookupResponse>, ApiError> {
    let zip = query
        .zip
        .map(|z| z.trim().to_string())
        .filter(|z| !z.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing 'zip' parameter".to_string()))?;

    let areas: Vec<AreaSummary> = state
        .catalog
        .areas_for_zip(&zip)
        .into_iter()
        .map(AreaSummary::from)
        .collect();

    Ok(Json(ZipLookupResponse {
        served: !areas.is_empty(),
        zip,
        areas,
    }))
}

// ==================== Energy Savings ====================

#[derive(Debug, Deserialize)]
struct SavingsQuery {
    current_seer: Option<f64>,
}

#[derive(Debug, Serialize)]
struct SavingsResponse {
    current_seer: f64,
    table: Vec<SavingsRow>,
}

async fn energy_savings(
    Query(query): Query<SavingsQuery>,
) -> Result<Json<SavingsResponse>, ApiError> {
    let current_seer = query
        .current_seer
        .filter(|seer| seer.is_finite() && *seer > 0.0)
        .ok_or_else(|| {
            ApiError::BadRequest("'current_seer' must be a positive number".to_string())
        })?;

    Ok(Json(SavingsResponse {
        current_seer,
        table: savings_table(current_seer),
    }))
}

// ==================== Sitemap ====================

async fn sitemap(State(state): State<SharedState>) -> Result<Response, ApiError> {
    let xml = build_sitemap(&state.catalog, &state.routes, &state.config.site_url)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml).into_response())
}

// ==================== ACME ====================

async fn acme_challenge(State(state): State<SharedState>, Path(token): Path<String>) -> Response {
    let Some(dir) = &state.config.acme_challenge_dir else {
        return StatusCode::NOT_FOUND.into_response();
    };

    // Tokens are base64url; anything else could escape the directory.
    let valid_token = !token.is_empty()
        && token
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if !valid_token {
        return StatusCode::NOT_FOUND.into_response();
    }

    match tokio::fs::read(dir.join(&token)).await {
        Ok(contents) => (
            [(header::CONTENT_TYPE, "text/plain")],
            Body::from(contents),
        )
            .into_response(),
        Err(e) => {
            warn!("ACME challenge '{}' not served: {}", token, e);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

// ==================== Admin ====================

async fn admin_metrics(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Result<Json<MetricsReport>, ApiError> {
    if !security::is_authorized(&headers, state.config.admin_api_key.as_deref()) {
        warn!("Unauthorized metrics request");
        return Err(ApiError::Unauthorized);
    }
    Ok(Json(state.metrics.report()))
}

// ==================== Health ====================

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    /// Uptime in seconds
    uptime: u64,
}

async fn health(State(state): State<SharedState>) -> impl IntoResponse {
    let body = HealthResponse {
        status: "up",
        version: env!("CARGO_PKG_VERSION"),
        uptime: state.started_at.elapsed().as_secs(),
    };

    (
        [(header::CACHE_CONTROL, "no-store, no-cache, must-revalidate")],
        Json(body),
    )
}
