//! Lunar phase, zodiac placement and natal chart calculations on top of the
//! Swiss Ephemeris.

pub mod angle;
pub mod classifier;
pub mod ephemeris;
pub mod error;
pub mod lunar;
pub mod report;
pub mod resolver;
pub mod service;
pub mod time;
pub mod western;

pub use classifier::{Classifier, Lookups};
pub use error::AstroError;
pub use service::AstroService;
