//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! [`create_router`] assembles them with the cross-cutting layers.

pub mod stage;

pub use stage::{stage_routes, StageAppState};

use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{FeatureFlags, ServerConfig};

/// Create the application router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. Tracing - logs all requests (when `enable_tracing` is set)
/// 2. CORS - handles preflight requests
/// 3. Timeout - aborts requests after `request_timeout_secs`
pub fn create_router(state: StageAppState, server: &ServerConfig, features: &FeatureFlags) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .merge(stage_routes())
        .with_state(state)
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(build_cors_layer(server));

    if features.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Build the CORS layer from the configured origins.
///
/// - No origins outside production: permissive
/// - No origins in production: same-origin only
/// - Otherwise: exactly the listed origins
fn build_cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(hv) => Some(hv),
            Err(e) => {
                tracing::warn!("CORS: Invalid origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        if server.is_production() {
            tracing::info!("CORS: No origins configured, cross-origin requests disabled");
            return CorsLayer::new();
        }
        tracing::warn!("CORS: No origins configured, allowing all origins outside production");
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
}
