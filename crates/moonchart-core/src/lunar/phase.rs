//! Moon phase from the Sun-Moon elongation.
//!
//! The cycle is cut into eight 45 degree buckets centred on the principal
//! angles 0, 45, ..., 315. New Moon straddles 0/360.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::angle::normalize_degrees;

const PHASE_WIDTH: f64 = 45.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseName {
    #[serde(rename = "New Moon")]
    NewMoon,
    #[serde(rename = "Waxing Crescent")]
    WaxingCrescent,
    #[serde(rename = "First Quarter")]
    FirstQuarter,
    #[serde(rename = "Waxing Gibbous")]
    WaxingGibbous,
    #[serde(rename = "Full Moon")]
    FullMoon,
    #[serde(rename = "Waning Gibbous")]
    WaningGibbous,
    #[serde(rename = "Last Quarter")]
    LastQuarter,
    #[serde(rename = "Waning Crescent")]
    WaningCrescent,
}

impl PhaseName {
    pub const ALL: [PhaseName; 8] = [
        PhaseName::NewMoon,
        PhaseName::WaxingCrescent,
        PhaseName::FirstQuarter,
        PhaseName::WaxingGibbous,
        PhaseName::FullMoon,
        PhaseName::WaningGibbous,
        PhaseName::LastQuarter,
        PhaseName::WaningCrescent,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseName::NewMoon => "New Moon",
            PhaseName::WaxingCrescent => "Waxing Crescent",
            PhaseName::FirstQuarter => "First Quarter",
            PhaseName::WaxingGibbous => "Waxing Gibbous",
            PhaseName::FullMoon => "Full Moon",
            PhaseName::WaningGibbous => "Waning Gibbous",
            PhaseName::LastQuarter => "Last Quarter",
            PhaseName::WaningCrescent => "Waning Crescent",
        }
    }

    /// Principal angle the bucket is centred on.
    pub fn center_angle(&self) -> f64 {
        self.index() as f64 * PHASE_WIDTH
    }

    /// Bucket a phase angle. Any real input is normalized first.
    pub fn from_angle(phase_angle: f64) -> PhaseName {
        let angle = normalize_degrees(phase_angle);
        // Shift by half a bucket so New Moon's [337.5, 22.5) wraps onto 0.
        let bucket = ((angle + PHASE_WIDTH / 2.0) / PHASE_WIDTH).floor() as usize % 8;
        PhaseName::ALL[bucket]
    }
}

impl fmt::Display for PhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Moon minus Sun longitude, in [0, 360).
pub fn phase_angle(sun_longitude: f64, moon_longitude: f64) -> f64 {
    normalize_degrees(moon_longitude - sun_longitude)
}

/// Illuminated fraction of the disc in percent, `(1 - cos a) / 2 * 100`.
pub fn illumination(phase_angle: f64) -> f64 {
    (1.0 - phase_angle.to_radians().cos()) / 2.0 * 100.0
}
