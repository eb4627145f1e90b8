//! HTTP surface: axum router, handlers and error mapping.

pub mod competitions;
pub mod error;
pub mod extract;
pub mod matches;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::Request;
use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{info, info_span, warn, Level};
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::service::FootballService;

/// Shared state accessible by all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<FootballService>,
}

impl AppState {
    pub fn new(service: FootballService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    let api = Router::new()
        .route("/competitions", get(competitions::list_competitions))
        .route("/competitions/", get(competitions::list_competitions))
        .route("/competitions/seasons", get(competitions::list_seasons))
        .route(
            "/competitions/{competition_id}/seasons/{season_id}/matches",
            get(competitions::list_season_matches),
        )
        .route("/matches", get(matches::list_matches))
        .route("/matches/", get(matches::list_matches))
        .route("/matches/{match_id}", get(matches::get_match));

    let router = Router::new()
        .route("/", get(root_handler))
        .route("/ping", get(ping_handler));

    let prefix = server.api_prefix.trim_matches('/');
    let router = if prefix.is_empty() {
        router.merge(api)
    } else {
        router.nest(&format!("/{prefix}"), api)
    };

    router
        .layer(cors_layer(&server.cors_origins))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request| {
                    info_span!(
                        "request",
                        id = %Uuid::new_v4(),
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Bind and serve until Ctrl-C.
pub async fn serve(server: &ServerConfig, state: AppState) -> Result<()> {
    let addr = server.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind API server on {addr}"))?;

    info!(addr = %addr, prefix = %server.api_prefix, "API server listening");

    axum::serve(listener, build_router(state, server))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("API server error")?;

    info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Failed to listen for Ctrl-C, running until killed");
            std::future::pending::<()>().await;
        }
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::very_permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}

// -- Route Handlers --

async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Welcome to Estilo Futbol API" }))
}

async fn ping_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
