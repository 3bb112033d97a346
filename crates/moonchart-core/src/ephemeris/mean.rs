//! Mean-motion ephemeris.
//!
//! Positions advance linearly from their J2000 mean longitudes, and houses are
//! equal houses from an ascendant derived from local sidereal time. Accurate
//! to a few degrees for the Sun and Moon and much worse for the rest; it needs
//! no data files, which makes it the ephemeris of choice for tests and
//! benchmarks.

use crate::angle::normalize_degrees;
use crate::ephemeris::types::{Body, BodyState, HouseCusps};
use crate::ephemeris::{Ephemeris, EphemerisError};
use crate::time::J2000;

// (mean longitude at J2000, mean daily motion) in degrees
const MEAN_ELEMENTS: [(f64, f64); 10] = [
    (280.46646, 0.985_647_36),   // Sun
    (218.3165, 13.176_396_48),   // Moon
    (252.2509, 4.092_334_45),    // Mercury
    (181.9798, 1.602_130_34),    // Venus
    (355.4330, 0.524_020_68),    // Mars
    (34.3515, 0.083_085_29),     // Jupiter
    (50.0774, 0.033_444_14),     // Saturn
    (314.0550, 0.011_728_34),    // Uranus
    (304.3490, 0.005_981_03),    // Neptune
    (238.9290, 0.003_960_00),    // Pluto
];

const OBLIQUITY_J2000: f64 = 23.439_291;

#[derive(Debug, Clone, Copy, Default)]
pub struct MeanMotionEphemeris;

impl MeanMotionEphemeris {
    pub fn new() -> Self {
        Self
    }
}

/// Greenwich mean sidereal time in degrees.
fn gmst_degrees(jd_ut: f64) -> f64 {
    normalize_degrees(280.460_618_37 + 360.985_647_366_29 * (jd_ut - J2000))
}

impl Ephemeris for MeanMotionEphemeris {
    fn body_state(&self, jd_ut: f64, body: Body) -> Result<BodyState, EphemerisError> {
        if !jd_ut.is_finite() {
            return Err(EphemerisError::CalculationFailed {
                body: body.name().to_string(),
                jd: jd_ut,
                message: "non-finite Julian Day".to_string(),
            });
        }
        let (l0, rate) = MEAN_ELEMENTS[body.swe_id() as usize];
        let lon = normalize_degrees(l0 + rate * (jd_ut - J2000));
        Ok(BodyState([lon, 0.0, 1.0, rate, 0.0, 0.0]))
    }

    fn houses(&self, jd_ut: f64, lat: f64, lon: f64) -> Result<HouseCusps, EphemerisError> {
        if lat.abs() >= 90.0 {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!("ascendant undefined at latitude {lat}"),
            });
        }
        let ramc = (gmst_degrees(jd_ut) + lon).to_radians();
        let eps = OBLIQUITY_J2000.to_radians();
        let phi = lat.to_radians();

        let ascendant = normalize_degrees(
            ramc.cos()
                .atan2(-(ramc.sin() * eps.cos() + phi.tan() * eps.sin()))
                .to_degrees(),
        );
        let mc = normalize_degrees(ramc.sin().atan2(ramc.cos() * eps.cos()).to_degrees());

        let mut cusps = [0.0; 12];
        for (i, cusp) in cusps.iter_mut().enumerate() {
            *cusp = normalize_degrees(ascendant + 30.0 * i as f64);
        }

        Ok(HouseCusps { cusps, ascendant, mc })
    }
}
