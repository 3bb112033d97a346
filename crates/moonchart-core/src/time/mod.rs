//! Time normalization: client timestamps and zone hints to UTC instants,
//! Julian Days, and local display times.

pub mod julian;
pub mod normalize;
pub mod zone;

pub use julian::{calendar_to_jd, julian_day, UtcCalendar, J2000};
pub use normalize::{local_to_utc, parse_chart_instant, NormalizedInstant, MAX_OFFSET_MINUTES};
pub use zone::{resolve_zone, FallbackReason, TzfLocator, ZoneLocator, ZoneResolution};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeError {
    #[error("datetimeISO is required")]
    MissingTimestamp,
    #[error(
        "Could not parse '{input}' as an ISO-8601 date-time (expected YYYY-MM-DD, \
         optionally followed by THH:MM[:SS[.fff]] and Z, +HH:MM or +HHMM)"
    )]
    InvalidTimestamp { input: String },
    #[error("tzOffsetMinutes {minutes} is more than 18 hours from UTC")]
    OffsetOutOfRange { minutes: i32 },
    #[error("Invalid calendar month {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },
}
