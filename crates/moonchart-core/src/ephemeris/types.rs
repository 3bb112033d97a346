use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ephemeris::EphemerisError;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

impl GeoLocation {
    /// Latitude within [-90, 90] and longitude within [-180, 180].
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

/// The ten classical chart bodies, in chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    pub const ALL: [Body; 10] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
        }
    }

    /// Swiss Ephemeris planet number (SE_SUN = 0 ... SE_PLUTO = 9).
    pub fn swe_id(&self) -> i32 {
        match self {
            Body::Sun => 0,
            Body::Moon => 1,
            Body::Mercury => 2,
            Body::Venus => 3,
            Body::Mars => 4,
            Body::Jupiter => 5,
            Body::Saturn => 6,
            Body::Uranus => 7,
            Body::Neptune => 8,
            Body::Pluto => 9,
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw body state as returned by the ephemeris:
/// `[lon, lat, distance, speed_lon, speed_lat, speed_distance]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState(pub [f64; 6]);

impl BodyState {
    /// Ecliptic longitude in degrees, as reported (not normalized).
    pub fn longitude(&self) -> f64 {
        self.0[0]
    }

}

/// House cusps and the main angles for one instant and place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps {
    /// Cusps of houses 1..=12, degrees in [0, 360)
    pub cusps: [f64; 12],
    pub ascendant: f64,
    pub mc: f64,
}

/// House systems understood by the Swiss Ephemeris adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    #[default]
    Placidus,
    WholeSign,
    Koch,
    Equal,
    Regiomontanus,
    Campanus,
    Alcabitius,
    Morinus,
}

/// House system mapping
const HOUSE_SYSTEMS: &[(&str, HouseSystem, u8)] = &[
    ("placidus", HouseSystem::Placidus, b'P'),
    ("whole_sign", HouseSystem::WholeSign, b'W'),
    ("koch", HouseSystem::Koch, b'K'),
    ("equal", HouseSystem::Equal, b'E'),
    ("regiomontanus", HouseSystem::Regiomontanus, b'R'),
    ("campanus", HouseSystem::Campanus, b'C'),
    ("alcabitius", HouseSystem::Alcabitius, b'A'),
    ("morinus", HouseSystem::Morinus, b'M'),
];

impl HouseSystem {
    /// Parse a house system name such as `"placidus"` or `"whole_sign"`.
    pub fn from_name(name: &str) -> Result<Self, EphemerisError> {
        let lower = name.trim().to_lowercase();
        HOUSE_SYSTEMS
            .iter()
            .find(|(n, _, _)| *n == lower)
            .map(|(_, system, _)| *system)
            .ok_or_else(|| EphemerisError::InvalidHouseSystem {
                system: name.to_string(),
                valid: Self::valid_names(),
            })
    }

    pub fn valid_names() -> Vec<String> {
        HOUSE_SYSTEMS.iter().map(|(n, _, _)| n.to_string()).collect()
    }

    pub fn name(&self) -> &'static str {
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, system, _)| system == self)
            .map(|(n, _, _)| *n)
            .unwrap_or("placidus")
    }

    /// Single-letter code passed to `swe_houses`.
    pub fn code(&self) -> u8 {
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, system, _)| system == self)
            .map(|(_, _, code)| *code)
            .unwrap_or(b'P')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_system_names() {
        assert_eq!(HouseSystem::from_name("Placidus").unwrap(), HouseSystem::Placidus);
        assert_eq!(HouseSystem::from_name("whole_sign").unwrap(), HouseSystem::WholeSign);
        match HouseSystem::from_name("topocentric") {
            Err(EphemerisError::InvalidHouseSystem { system, valid }) => {
                assert_eq!(system, "topocentric");
                assert_eq!(valid.len(), 8);
                assert!(valid.contains(&"koch".to_string()));
            }
            other => panic!("expected InvalidHouseSystem, got {:?}", other),
        }
        assert_eq!(HouseSystem::Koch.code(), b'K');
        assert_eq!(HouseSystem::Equal.name(), "equal");
    }

    #[test]
    fn test_body_state_longitude() {
        let state = BodyState([123.5, 1.2, 0.98, -0.3, 0.0, 0.0]);
        assert_eq!(state.longitude(), 123.5);
    }

    #[test]
    fn test_geo_location_bounds() {
        assert!(GeoLocation { lat: 51.48, lon: 0.0 }.is_valid());
        assert!(!GeoLocation { lat: 91.0, lon: 0.0 }.is_valid());
        assert!(!GeoLocation { lat: 0.0, lon: f64::NAN }.is_valid());
    }
}
