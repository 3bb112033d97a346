use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use moonchart_core::report::{
    CalendarQuery, CalendarReport, ChartReport, ChartRequest, MoonReport, ZoneHints,
};
use serde_json::json;

use crate::error::ApiError;
use crate::state::AppState;

/// Current Moon sign and phase for the caller's zone.
pub async fn moon_phase(
    State(state): State<AppState>,
    query: Result<Query<ZoneHints>, QueryRejection>,
) -> Result<Json<MoonReport>, ApiError> {
    let Query(hints) = query?;
    let report = state.service.moon_phase(&hints)?;
    log::debug!(
        "moon-phase in {}: {} {}",
        report.timezone,
        report.moon_zodiac.sign.name(),
        report.moon_phase.phase_name.as_str()
    );
    Ok(Json(report))
}

pub async fn chart(
    State(state): State<AppState>,
    body: Result<Json<ChartRequest>, JsonRejection>,
) -> Result<Json<ChartReport>, ApiError> {
    let Json(request) = body?;
    log::debug!(
        "chart for {} (offset {} min) at {:.4}, {:.4}",
        request.datetime_iso,
        request.tz_offset_minutes,
        request.latitude,
        request.longitude
    );
    Ok(Json(state.service.chart(&request)?))
}

pub async fn moon_calendar(
    State(state): State<AppState>,
    query: Result<Query<CalendarQuery>, QueryRejection>,
) -> Result<Json<CalendarReport>, ApiError> {
    let Query(query) = query?;
    Ok(Json(state.service.moon_calendar(&query)?))
}

pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
