use thiserror::Error;

use crate::ephemeris::EphemerisError;
use crate::time::TimeError;

#[derive(Error, Debug)]
pub enum AstroError {
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error("{0}")]
    InvalidInput(String),
}

impl AstroError {
    /// Whether the caller sent something unusable, as opposed to the
    /// ephemeris failing underneath us.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AstroError::Time(_) | AstroError::InvalidInput(_))
    }
}
