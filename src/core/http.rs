//! HTTP endpoint server using Axum.
//!
//! Read-only surface over the dataset store. Every statistics endpoint
//! runs the aggregation pipeline fresh against in-memory observations;
//! requests share nothing mutable, so the service scales horizontally.

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::charts;
use crate::locale::Locale;
use crate::metrics::Metrics;
use crate::models::WardPercentage;
use crate::pipeline::{self, NormalizeOutput};
use crate::store::{Dataset, DatasetStore, StoreError};

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub store: Arc<DatasetStore>,
    pub default_locale: Locale,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "datasets": state.store.len(),
        "service": "wardstat-profile-engine"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Deserialize)]
struct LocaleQuery {
    locale: Option<Locale>,
}

fn lookup<'a>(state: &'a AppState, slug: &str) -> Result<&'a Dataset, StatusCode> {
    state.store.get(slug).map_err(|e| match e {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    })
}

/// Run stages 1–2 for a dataset. The store validates category sets at
/// load time, so a pipeline failure here is a server bug.
fn run_pipeline(dataset: &Dataset) -> Result<(NormalizeOutput, Vec<WardPercentage>), StatusCode> {
    let normalized =
        pipeline::normalize(&dataset.observations, &dataset.categories).map_err(|e| {
            error!(error = %e, slug = %dataset.slug, "pipeline failure");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    let percentages = pipeline::to_percentages(&normalized.aggregates);
    Ok((normalized, percentages))
}

/// List available indicator datasets.
async fn list_datasets(State(state): State<AppState>) -> Json<Value> {
    Json(json!(state.store.list()))
}

/// Per-ward category totals for one indicator.
async fn get_aggregates(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let dataset = lookup(&state, &slug)?;
    let (normalized, _) = run_pipeline(dataset)?;
    Ok(Json(json!({
        "slug": dataset.slug,
        "aggregates": normalized.aggregates,
        "dropped_categories": normalized.dropped,
    })))
}

/// Per-ward percentage shares for one indicator.
async fn get_percentages(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let dataset = lookup(&state, &slug)?;
    let (_, percentages) = run_pipeline(dataset)?;
    Ok(Json(json!({
        "slug": dataset.slug,
        "percentages": percentages,
    })))
}

/// Narrative summary paragraph for one indicator.
///
/// An indicator without data still answers 200 with the template set's
/// no-data sentence; these pages degrade, they do not crash.
async fn get_narrative(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<LocaleQuery>,
) -> Result<Json<Value>, StatusCode> {
    let dataset = lookup(&state, &slug)?;
    let locale = params.locale.unwrap_or(state.default_locale);
    let templates = dataset.template(locale).ok_or_else(|| {
        error!(slug = %slug, locale = %locale, "no narrative templates for locale");
        StatusCode::NOT_FOUND
    })?;
    let (_, percentages) = run_pipeline(dataset)?;
    let narrative = pipeline::narrative_or_fallback(&percentages, locale, templates);
    Ok(Json(json!({
        "slug": dataset.slug,
        "locale": locale,
        "narrative": narrative,
    })))
}

/// Chart-ready payloads (municipal pie plus per-ward bars).
async fn get_chart(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<LocaleQuery>,
) -> Result<Json<Value>, StatusCode> {
    let dataset = lookup(&state, &slug)?;
    let locale = params.locale.unwrap_or(state.default_locale);
    let (_, percentages) = run_pipeline(dataset)?;
    let pie = charts::municipal_pie(&percentages, &dataset.categories, locale);
    let bars = charts::ward_bars(&percentages, &dataset.categories, locale);
    Ok(Json(json!({
        "slug": dataset.slug,
        "locale": locale,
        "title": dataset.title(locale),
        "pie": pie,
        "bars": bars,
    })))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/datasets", get(list_datasets))
        .route("/api/datasets/{slug}/aggregates", get(get_aggregates))
        .route("/api/datasets/{slug}/percentages", get(get_percentages))
        .route("/api/datasets/{slug}/narrative", get(get_narrative))
        .route("/api/datasets/{slug}/chart", get(get_chart))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(
    port: u16,
    store: Arc<DatasetStore>,
    default_locale: Locale,
) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics,
        start_time: Arc::new(Instant::now()),
        store,
        default_locale,
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
