//! The twelve tropical signs and their fixed attributes.
//!
//! Each sign spans 30 degrees of ecliptic longitude starting from 0 Aries.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::angle::normalize_degrees;

pub const SIGN_SPAN: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

const SIGN_ORDER: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = SIGN_ORDER;

    /// Position in the zodiac, Aries = 0.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> ZodiacSign {
        SIGN_ORDER[index % 12]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    /// Fire, Earth, Air, Water repeating from Aries.
    pub fn element(&self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// Cardinal, Fixed, Mutable repeating from Aries.
    pub fn modality(&self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Cardinal,
            1 => Modality::Fixed,
            _ => Modality::Mutable,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "\u{2648}",
            ZodiacSign::Taurus => "\u{2649}",
            ZodiacSign::Gemini => "\u{264A}",
            ZodiacSign::Cancer => "\u{264B}",
            ZodiacSign::Leo => "\u{264C}",
            ZodiacSign::Virgo => "\u{264D}",
            ZodiacSign::Libra => "\u{264E}",
            ZodiacSign::Scorpio => "\u{264F}",
            ZodiacSign::Sagittarius => "\u{2650}",
            ZodiacSign::Capricorn => "\u{2651}",
            ZodiacSign::Aquarius => "\u{2652}",
            ZodiacSign::Pisces => "\u{2653}",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sign and unrounded degree within it for any longitude.
pub fn sign_from_longitude(longitude: f64) -> (ZodiacSign, f64) {
    let lon = normalize_degrees(longitude);
    let index = (lon / SIGN_SPAN).floor() as usize;
    (ZodiacSign::from_index(index), lon % SIGN_SPAN)
}
