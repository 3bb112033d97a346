use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classifier::{Classifier, MoonPhase, ZodiacPlacement};
use crate::ephemeris::GeoLocation;
use crate::error::AstroError;
use crate::resolver::PositionResolver;
use crate::time::{resolve_zone, NormalizedInstant, ZoneLocator, ZoneResolution};

/// Optional location hints accepted by the moon endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneHints {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone_name: Option<String>,
}

impl ZoneHints {
    /// Coordinates only count when both halves are present.
    pub fn location(&self) -> Option<GeoLocation> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(GeoLocation { lat, lon }),
            _ => None,
        }
    }

    pub fn resolve(&self, locator: &dyn ZoneLocator) -> ZoneResolution {
        resolve_zone(self.timezone_name.as_deref(), self.location(), locator)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonReport {
    pub datetime: String,
    pub timezone: String,
    pub utc_datetime: String,
    pub moon_zodiac: ZodiacPlacement,
    pub moon_phase: MoonPhase,
}

pub fn moon_report(
    resolver: &PositionResolver,
    classifier: &Classifier,
    locator: &dyn ZoneLocator,
    hints: &ZoneHints,
    now: DateTime<Utc>,
) -> Result<MoonReport, AstroError> {
    let instant = NormalizedInstant::new(now, hints.resolve(locator));
    let (sun, moon) = resolver.luminaries(instant.utc)?;
    log::debug!(
        "Moon report at {} ({}): sun {:.4}, moon {:.4}",
        instant.utc_iso(),
        instant.zone_id(),
        sun,
        moon
    );

    Ok(MoonReport {
        datetime: instant.local_iso(),
        timezone: instant.zone_id().to_string(),
        utc_datetime: instant.utc_iso(),
        moon_zodiac: classifier.zodiac(moon),
        moon_phase: classifier.moon_phase(sun, moon),
    })
}
