use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ephemeris::Body;

/// Anything that gets a placement in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartPoint {
    Planet(Body),
    Ascendant,
}

impl ChartPoint {
    pub fn name(&self) -> &'static str {
        match self {
            ChartPoint::Planet(body) => body.name(),
            ChartPoint::Ascendant => "Ascendant",
        }
    }
}

impl fmt::Display for ChartPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Body> for ChartPoint {
    fn from(body: Body) -> Self {
        ChartPoint::Planet(body)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetMeaning {
    pub symbol: String,
    pub meaning: String,
}

// (point, glyph, meaning)
pub const PLANET_MEANINGS: &[(ChartPoint, &str, &str)] = &[
    (
        ChartPoint::Planet(Body::Sun),
        "\u{2609}",
        "Core identity, vitality and the conscious will.",
    ),
    (
        ChartPoint::Planet(Body::Moon),
        "\u{263D}",
        "Emotions, instincts and what makes you feel safe.",
    ),
    (
        ChartPoint::Planet(Body::Mercury),
        "\u{263F}",
        "Thinking, communication and how you learn.",
    ),
    (
        ChartPoint::Planet(Body::Venus),
        "\u{2640}",
        "Love, beauty, pleasure and what you value.",
    ),
    (
        ChartPoint::Planet(Body::Mars),
        "\u{2642}",
        "Drive, courage, desire and how you take action.",
    ),
    (
        ChartPoint::Planet(Body::Jupiter),
        "\u{2643}",
        "Growth, optimism, wisdom and good fortune.",
    ),
    (
        ChartPoint::Planet(Body::Saturn),
        "\u{2644}",
        "Discipline, responsibility, limits and lessons over time.",
    ),
    (
        ChartPoint::Planet(Body::Uranus),
        "\u{2645}",
        "Change, originality, rebellion and sudden insight.",
    ),
    (
        ChartPoint::Planet(Body::Neptune),
        "\u{2646}",
        "Dreams, intuition, spirituality and illusion.",
    ),
    (
        ChartPoint::Planet(Body::Pluto),
        "\u{2647}",
        "Transformation, power and rebirth.",
    ),
    (
        ChartPoint::Ascendant,
        "AC",
        "The rising sign: first impressions and how you meet the world.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_chart_point_has_a_meaning() {
        for body in Body::ALL {
            assert!(PLANET_MEANINGS.iter().any(|(p, _, _)| *p == ChartPoint::Planet(body)));
        }
        assert!(PLANET_MEANINGS.iter().any(|(p, _, _)| *p == ChartPoint::Ascendant));
    }
}
