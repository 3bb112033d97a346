pub mod adapter;
pub mod mean;
pub mod types;

pub use adapter::SwissEphemerisAdapter;
pub use mean::MeanMotionEphemeris;
pub use types::{Body, BodyState, GeoLocation, HouseCusps, HouseSystem};

use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Invalid house system: {system}. Valid systems: {valid:?}")]
    InvalidHouseSystem { system: String, valid: Vec<String> },
    #[error("Failed to calculate position for {body} at JD {jd}: {message}")]
    CalculationFailed {
        body: String,
        jd: f64,
        message: String,
    },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
}

/// Source of ecliptic positions and house cusps.
///
/// Implementations take a Julian Day in Universal Time and must be safe to
/// share between concurrent requests.
pub trait Ephemeris: Send + Sync {
    fn body_state(&self, jd_ut: f64, body: Body) -> Result<BodyState, EphemerisError>;

    fn houses(&self, jd_ut: f64, lat: f64, lon: f64) -> Result<HouseCusps, EphemerisError>;
}
