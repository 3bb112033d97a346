//! Astrological classification of ecliptic longitudes.
//!
//! The descriptive tables live in [`Lookups`], built once at startup and
//! handed to the [`Classifier`]; the bucketing itself is in
//! [`crate::western::signs`] and [`crate::lunar::phase`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::angle::{normalize_degrees, round2};
use crate::lunar::{illumination, phase_angle, PhaseInfo, PhaseName, PHASE_INFO};
use crate::western::{
    get_sign_ruler, sign_from_longitude, ChartPoint, Element, Modality, PlanetMeaning, ZodiacSign,
    PLANET_MEANINGS,
};

const FALLBACK_PHASE_EMOJI: &str = "\u{1F319}";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignProperties {
    pub element: Element,
    pub modality: Modality,
    pub symbol: String,
    pub traditional_ruler: String,
    pub modern_ruler: String,
}

impl SignProperties {
    fn standard(sign: ZodiacSign) -> Self {
        Self {
            element: sign.element(),
            modality: sign.modality(),
            symbol: sign.symbol().to_string(),
            traditional_ruler: get_sign_ruler(sign, false).to_string(),
            modern_ruler: get_sign_ruler(sign, true).to_string(),
        }
    }
}

/// Immutable descriptive tables.
#[derive(Debug, Clone, Default)]
pub struct Lookups {
    signs: HashMap<ZodiacSign, SignProperties>,
    phases: HashMap<PhaseName, PhaseInfo>,
    meanings: HashMap<ChartPoint, PlanetMeaning>,
}

lazy_static::lazy_static! {
    static ref STANDARD_LOOKUPS: Arc<Lookups> = Arc::new(Lookups::standard());
}

impl Lookups {
    pub fn new(
        signs: HashMap<ZodiacSign, SignProperties>,
        phases: HashMap<PhaseName, PhaseInfo>,
        meanings: HashMap<ChartPoint, PlanetMeaning>,
    ) -> Self {
        Self {
            signs,
            phases,
            meanings,
        }
    }

    /// Tables for all twelve signs, eight phases and eleven chart points.
    pub fn standard() -> Self {
        let signs = ZodiacSign::ALL
            .iter()
            .map(|sign| (*sign, SignProperties::standard(*sign)))
            .collect();
        let phases = PHASE_INFO
            .iter()
            .map(|(phase, emoji, description, energy)| {
                (
                    *phase,
                    PhaseInfo {
                        emoji: emoji.to_string(),
                        description: description.to_string(),
                        energy: energy.to_string(),
                    },
                )
            })
            .collect();
        let meanings = PLANET_MEANINGS
            .iter()
            .map(|(point, symbol, meaning)| {
                (
                    *point,
                    PlanetMeaning {
                        symbol: symbol.to_string(),
                        meaning: meaning.to_string(),
                    },
                )
            })
            .collect();
        Self::new(signs, phases, meanings)
    }

    /// Process-wide copy of [`Lookups::standard`].
    pub fn shared() -> Arc<Lookups> {
        STANDARD_LOOKUPS.clone()
    }

    pub fn sign(&self, sign: ZodiacSign) -> Option<&SignProperties> {
        self.signs.get(&sign)
    }

    pub fn phase(&self, phase: PhaseName) -> Option<&PhaseInfo> {
        self.phases.get(&phase)
    }

    pub fn meaning(&self, point: ChartPoint) -> Option<&PlanetMeaning> {
        self.meanings.get(&point)
    }
}

/// Sign placement as shown for the Moon on the phase page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZodiacPlacement {
    pub sign: ZodiacSign,
    pub degree: f64,
    pub symbol: String,
    pub element: Element,
    pub modality: Modality,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonPhase {
    pub phase_name: PhaseName,
    pub phase_angle: f64,
    pub illumination: f64,
    pub emoji: String,
    pub description: String,
    pub energy: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstrologyDetails {
    pub element: Element,
    pub modality: Modality,
    pub ruling_planet: String,
}

/// One entry of a natal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPlacement {
    pub sign: ZodiacSign,
    pub degree: f64,
    pub longitude: f64,
    pub astrology_details: AstrologyDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planet_meaning: Option<PlanetMeaning>,
}

#[derive(Debug, Clone)]
pub struct Classifier {
    lookups: Arc<Lookups>,
    modern_rulers: bool,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(Lookups::shared(), true)
    }
}

impl Classifier {
    pub fn new(lookups: Arc<Lookups>, modern_rulers: bool) -> Self {
        Self {
            lookups,
            modern_rulers,
        }
    }

    fn sign_properties(&self, sign: ZodiacSign) -> SignProperties {
        self.lookups
            .sign(sign)
            .cloned()
            .unwrap_or_else(|| SignProperties::standard(sign))
    }

    pub fn zodiac(&self, longitude: f64) -> ZodiacPlacement {
        let (sign, degree) = sign_from_longitude(longitude);
        let props = self.sign_properties(sign);
        ZodiacPlacement {
            sign,
            degree: round2(degree),
            symbol: props.symbol,
            element: props.element,
            modality: props.modality,
        }
    }

    pub fn moon_phase(&self, sun_longitude: f64, moon_longitude: f64) -> MoonPhase {
        let angle = phase_angle(sun_longitude, moon_longitude);
        let phase_name = PhaseName::from_angle(angle);
        let (emoji, description, energy) = match self.lookups.phase(phase_name) {
            Some(info) => (info.emoji.clone(), info.description.clone(), info.energy.clone()),
            None => (FALLBACK_PHASE_EMOJI.to_string(), String::new(), String::new()),
        };
        MoonPhase {
            phase_name,
            phase_angle: round2(angle),
            illumination: round2(illumination(angle)),
            emoji,
            description,
            energy,
        }
    }

    pub fn chart_placement(&self, point: ChartPoint, longitude: f64) -> ChartPlacement {
        let longitude = normalize_degrees(longitude);
        let (sign, degree) = sign_from_longitude(longitude);
        let props = self.sign_properties(sign);
        let ruling_planet = if self.modern_rulers {
            props.modern_ruler
        } else {
            props.traditional_ruler
        };
        ChartPlacement {
            sign,
            degree: round2(degree),
            longitude,
            astrology_details: AstrologyDetails {
                element: props.element,
                modality: props.modality,
                ruling_planet,
            },
            planet_meaning: self.lookups.meaning(point).cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::Body;

    #[test]
    fn test_zodiac_placement() {
        let classifier = Classifier::default();
        let p = classifier.zodiac(45.256);
        assert_eq!(p.sign, ZodiacSign::Taurus);
        assert_eq!(p.degree, 15.26);
        assert_eq!(p.element, Element::Earth);
        assert_eq!(p.modality, Modality::Fixed);
        assert_eq!(p.symbol, "\u{2649}");
    }

    #[test]
    fn test_zodiac_periodicity() {
        let classifier = Classifier::default();
        for lon in [0.0, 12.5, 29.999, 30.0, 181.25, 359.999] {
            let base = classifier.zodiac(lon).sign;
            for k in [-3.0, -1.0, 1.0, 2.0, 10.0] {
                assert_eq!(classifier.zodiac(lon + 360.0 * k).sign, base, "lon {lon}, k {k}");
            }
        }
    }

    #[test]
    fn test_moon_phase_reference_points() {
        let classifier = Classifier::default();

        let new = classifier.moon_phase(0.0, 0.0);
        assert_eq!(new.phase_name, PhaseName::NewMoon);
        assert_eq!(new.illumination, 0.0);
        assert_eq!(new.emoji, "\u{1F311}");

        let full = classifier.moon_phase(0.0, 180.0);
        assert_eq!(full.phase_name, PhaseName::FullMoon);
        assert_eq!(full.illumination, 100.0);

        let quarter = classifier.moon_phase(0.0, 90.0);
        assert_eq!(quarter.phase_name, PhaseName::FirstQuarter);
        assert_eq!(quarter.illumination, 50.0);
        assert_eq!(quarter.phase_angle, 90.0);
    }

    #[test]
    fn test_chart_placement_rulers_and_meaning() {
        let modern = Classifier::new(Lookups::shared(), true);
        let traditional = Classifier::new(Lookups::shared(), false);

        let p = modern.chart_placement(ChartPoint::Planet(Body::Mars), 215.0);
        assert_eq!(p.sign, ZodiacSign::Scorpio);
        assert_eq!(p.degree, 5.0);
        assert_eq!(p.astrology_details.ruling_planet, "Pluto");
        assert_eq!(p.planet_meaning.as_ref().map(|m| m.symbol.as_str()), Some("\u{2642}"));

        let p = traditional.chart_placement(ChartPoint::Planet(Body::Mars), 215.0);
        assert_eq!(p.astrology_details.ruling_planet, "Mars");
    }

    #[test]
    fn test_injected_tables_fall_back_gracefully() {
        let classifier = Classifier::new(Arc::new(Lookups::default()), true);

        let phase = classifier.moon_phase(0.0, 200.0);
        assert_eq!(phase.phase_name, PhaseName::FullMoon);
        assert_eq!(phase.emoji, FALLBACK_PHASE_EMOJI);
        assert!(phase.description.is_empty());

        let p = classifier.chart_placement(ChartPoint::Ascendant, -10.0);
        assert_eq!(p.sign, ZodiacSign::Pisces);
        assert_eq!(p.longitude, 350.0);
        assert!(p.planet_meaning.is_none());
        assert_eq!(p.astrology_details.element, Element::Water);
    }

    #[test]
    fn test_placement_serializes_like_the_api() {
        let classifier = Classifier::default();
        let json = serde_json::to_value(classifier.chart_placement(ChartPoint::Ascendant, 100.0))
            .unwrap();
        assert_eq!(json["sign"], "Cancer");
        assert_eq!(json["astrology_details"]["element"], "Water");
        assert_eq!(json["astrology_details"]["modality"], "Cardinal");
        assert_eq!(json["astrology_details"]["ruling_planet"], "Moon");

        let json = serde_json::to_value(classifier.moon_phase(0.0, 300.0)).unwrap();
        assert_eq!(json["phase_name"], "Waning Crescent");
    }
}
