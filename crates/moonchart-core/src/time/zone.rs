//! Timezone resolution with silent fallback to UTC.

use chrono_tz::Tz;
use std::fmt;
use tzf_rs::DefaultFinder;

use crate::ephemeris::GeoLocation;

/// Maps a coordinate pair to an IANA zone name.
pub trait ZoneLocator: Send + Sync {
    fn locate(&self, lat: f64, lon: f64) -> Option<String>;
}

/// Polygon-based lookup backed by `tzf-rs`. Building the finder loads the
/// whole boundary dataset, so construct it once and share it.
pub struct TzfLocator {
    finder: DefaultFinder,
}

impl TzfLocator {
    pub fn new() -> Self {
        Self {
            finder: DefaultFinder::new(),
        }
    }
}

impl Default for TzfLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneLocator for TzfLocator {
    fn locate(&self, lat: f64, lon: f64) -> Option<String> {
        let name = self.finder.get_tz_name(lon, lat);
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}

/// Why a request ended up on UTC.
#[derive(Debug, Clone, PartialEq)]
pub enum FallbackReason {
    /// No zone name and no coordinates were supplied.
    NoHint,
    UnknownZoneName(String),
    InvalidCoordinates { lat: f64, lon: f64 },
    /// The locator found no zone for the coordinates.
    NoZoneAtLocation { lat: f64, lon: f64 },
    /// The locator answered with a name chrono-tz does not know.
    UnrecognizedLocatorZone(String),
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::NoHint => write!(f, "no timezone hint supplied"),
            FallbackReason::UnknownZoneName(name) => write!(f, "unknown timezone name '{}'", name),
            FallbackReason::InvalidCoordinates { lat, lon } => {
                write!(f, "coordinates out of range ({}, {})", lat, lon)
            }
            FallbackReason::NoZoneAtLocation { lat, lon } => {
                write!(f, "no timezone found at ({}, {})", lat, lon)
            }
            FallbackReason::UnrecognizedLocatorZone(name) => {
                write!(f, "locator returned unrecognized zone '{}'", name)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ZoneResolution {
    Resolved { tz: Tz },
    Fallback { reason: FallbackReason },
}

impl ZoneResolution {
    /// Zone to display local time in; UTC for any fallback.
    pub fn tz(&self) -> Tz {
        match self {
            ZoneResolution::Resolved { tz } => *tz,
            ZoneResolution::Fallback { .. } => Tz::UTC,
        }
    }

    /// IANA id of the resolved zone, or `"UTC"`.
    pub fn zone_id(&self) -> &'static str {
        match self {
            ZoneResolution::Resolved { tz } => tz.name(),
            ZoneResolution::Fallback { .. } => "UTC",
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ZoneResolution::Fallback { .. })
    }
}

fn parse_zone(name: &str) -> Option<Tz> {
    name.trim().parse::<Tz>().ok()
}

/// Resolve a display zone: an explicit name wins over coordinates; every
/// failure degrades to UTC.
pub fn resolve_zone(
    timezone_name: Option<&str>,
    location: Option<GeoLocation>,
    locator: &dyn ZoneLocator,
) -> ZoneResolution {
    let resolution = match (timezone_name.filter(|n| !n.trim().is_empty()), location) {
        (Some(name), _) => match parse_zone(name) {
            Some(tz) => ZoneResolution::Resolved { tz },
            None => ZoneResolution::Fallback {
                reason: FallbackReason::UnknownZoneName(name.to_string()),
            },
        },
        (None, Some(loc)) if !loc.is_valid() => ZoneResolution::Fallback {
            reason: FallbackReason::InvalidCoordinates {
                lat: loc.lat,
                lon: loc.lon,
            },
        },
        (None, Some(loc)) => match locator.locate(loc.lat, loc.lon) {
            Some(name) => match parse_zone(&name) {
                Some(tz) => ZoneResolution::Resolved { tz },
                None => ZoneResolution::Fallback {
                    reason: FallbackReason::UnrecognizedLocatorZone(name),
                },
            },
            None => ZoneResolution::Fallback {
                reason: FallbackReason::NoZoneAtLocation {
                    lat: loc.lat,
                    lon: loc.lon,
                },
            },
        },
        (None, None) => ZoneResolution::Fallback {
            reason: FallbackReason::NoHint,
        },
    };

    if let ZoneResolution::Fallback { reason } = &resolution {
        log::debug!("Timezone resolution fell back to UTC: {}", reason);
    }
    resolution
}
