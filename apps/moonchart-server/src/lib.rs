//! HTTP front for the moon phase and natal chart service.

pub mod error;
pub mod routes;
pub mod state;

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use moonchart_config::Settings;
use moonchart_core::ephemeris::{HouseSystem, SwissEphemerisAdapter};
use moonchart_core::time::TzfLocator;
use moonchart_core::{AstroService, Classifier, Lookups};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub use error::ApiError;
pub use state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/moon-phase", get(routes::moon_phase))
        .route("/chart", post(routes::chart))
        .route("/moon-calendar", get(routes::moon_calendar))
        .route("/health", get(routes::health))
        .with_state(state)
}

pub fn cors_layer(origins: &[String]) -> anyhow::Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin '{}'", o))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any))
}

pub fn parse_house_system(name: &str) -> anyhow::Result<HouseSystem> {
    Ok(HouseSystem::from_name(name)?)
}

/// Build the production service: Swiss Ephemeris files plus the embedded
/// time zone boundaries. Fails when either the data directory or the house
/// system is unusable.
pub fn build_service(settings: &Settings) -> anyhow::Result<AstroService> {
    let house_system = parse_house_system(&settings.house_system)?;
    let adapter = SwissEphemerisAdapter::new(settings.ephemeris_path.clone(), house_system)
        .context("Failed to initialize Swiss Ephemeris (set [ephemeris].path or SWISS_EPHEMERIS_PATH)")?;
    let locator = TzfLocator::new();
    let classifier = Classifier::new(Lookups::shared(), settings.modern_rulers);

    Ok(AstroService::new(
        Arc::new(adapter),
        Arc::new(locator),
        classifier,
    ))
}
