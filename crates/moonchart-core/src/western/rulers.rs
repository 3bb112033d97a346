//! Sign rulers for Western astrology.
//!
//! Maps zodiac signs to their planetary rulers (traditional and modern).

use crate::western::signs::ZodiacSign;

const TRADITIONAL_RULERS: [&str; 12] = [
    "Mars",    // Aries
    "Venus",   // Taurus
    "Mercury", // Gemini
    "Moon",    // Cancer
    "Sun",     // Leo
    "Mercury", // Virgo
    "Venus",   // Libra
    "Mars",    // Scorpio
    "Jupiter", // Sagittarius
    "Saturn",  // Capricorn
    "Saturn",  // Aquarius
    "Jupiter", // Pisces
];

// Modern rulerships hand Scorpio, Aquarius and Pisces to the outer planets
const MODERN_RULERS: [&str; 12] = [
    "Mars",
    "Venus",
    "Mercury",
    "Moon",
    "Sun",
    "Mercury",
    "Venus",
    "Pluto",
    "Jupiter",
    "Saturn",
    "Uranus",
    "Neptune",
];

/// Get sign ruler
pub fn get_sign_ruler(sign: ZodiacSign, modern: bool) -> &'static str {
    if modern {
        MODERN_RULERS[sign.index()]
    } else {
        TRADITIONAL_RULERS[sign.index()]
    }
}
