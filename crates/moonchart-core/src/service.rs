use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::classifier::Classifier;
use crate::ephemeris::Ephemeris;
use crate::error::AstroError;
use crate::report::{
    calendar_report, chart_report, moon_report, CalendarQuery, CalendarReport, ChartReport,
    ChartRequest, MoonReport, ZoneHints,
};
use crate::resolver::PositionResolver;
use crate::time::ZoneLocator;

/// Everything a request needs, shared read-only between requests.
#[derive(Clone)]
pub struct AstroService {
    resolver: PositionResolver,
    classifier: Classifier,
    locator: Arc<dyn ZoneLocator>,
}

impl AstroService {
    pub fn new(
        ephemeris: Arc<dyn Ephemeris>,
        locator: Arc<dyn ZoneLocator>,
        classifier: Classifier,
    ) -> Self {
        Self {
            resolver: PositionResolver::new(ephemeris),
            classifier,
            locator,
        }
    }

    pub fn moon_phase(&self, hints: &ZoneHints) -> Result<MoonReport, AstroError> {
        self.moon_phase_at(hints, Utc::now())
    }

    pub fn moon_phase_at(
        &self,
        hints: &ZoneHints,
        now: DateTime<Utc>,
    ) -> Result<MoonReport, AstroError> {
        moon_report(&self.resolver, &self.classifier, self.locator.as_ref(), hints, now)
    }

    pub fn chart(&self, request: &ChartRequest) -> Result<ChartReport, AstroError> {
        chart_report(&self.resolver, &self.classifier, request)
    }

    pub fn moon_calendar(&self, query: &CalendarQuery) -> Result<CalendarReport, AstroError> {
        calendar_report(&self.resolver, &self.classifier, self.locator.as_ref(), query)
    }
}
