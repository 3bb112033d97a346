use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::ephemeris::{Body, Ephemeris, EphemerisError, GeoLocation, HouseCusps};
use crate::time::julian_day;

/// Longitudes of every chart body plus the houses for one instant and place.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPositions {
    /// In [`Body::ALL`] order
    pub bodies: Vec<(Body, f64)>,
    pub houses: HouseCusps,
}

/// Thin layer over an [`Ephemeris`] that speaks in UTC instants.
#[derive(Clone)]
pub struct PositionResolver {
    ephemeris: Arc<dyn Ephemeris>,
}

impl PositionResolver {
    pub fn new(ephemeris: Arc<dyn Ephemeris>) -> Self {
        Self { ephemeris }
    }

    /// Ecliptic longitude of `body` as reported by the ephemeris.
    pub fn longitude_of(&self, instant: DateTime<Utc>, body: Body) -> Result<f64, EphemerisError> {
        Ok(self
            .ephemeris
            .body_state(julian_day(instant), body)?
            .longitude())
    }

    pub fn house_cusps(
        &self,
        instant: DateTime<Utc>,
        location: GeoLocation,
    ) -> Result<HouseCusps, EphemerisError> {
        self.ephemeris
            .houses(julian_day(instant), location.lat, location.lon)
    }

    /// Sun and Moon longitudes, the inputs of the phase calculation.
    pub fn luminaries(&self, instant: DateTime<Utc>) -> Result<(f64, f64), EphemerisError> {
        Ok((
            self.longitude_of(instant, Body::Sun)?,
            self.longitude_of(instant, Body::Moon)?,
        ))
    }

    pub fn chart_positions(
        &self,
        instant: DateTime<Utc>,
        location: GeoLocation,
    ) -> Result<ChartPositions, EphemerisError> {
        let bodies = Body::ALL
            .iter()
            .map(|body| Ok((*body, self.longitude_of(instant, *body)?)))
            .collect::<Result<Vec<_>, EphemerisError>>()?;
        let houses = self.house_cusps(instant, location)?;
        Ok(ChartPositions { bodies, houses })
    }
}
