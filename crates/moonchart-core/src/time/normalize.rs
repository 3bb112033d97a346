use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc,
};
use chrono_tz::Tz;

use crate::time::julian::julian_day;
use crate::time::zone::ZoneResolution;
use crate::time::TimeError;

/// Largest accepted client offset, in minutes either side of UTC.
pub const MAX_OFFSET_MINUTES: i32 = 18 * 60;

// Date and time may be split by `T` or a space.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

// `%:z` is `+05:30`, `%z` is `+0530`.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%d %H:%M%z",
];

/// One instant, seen both as UTC (for the ephemeris) and in the display zone.
#[derive(Debug, Clone)]
pub struct NormalizedInstant {
    pub utc: DateTime<Utc>,
    pub local: DateTime<Tz>,
    pub resolution: ZoneResolution,
}

impl NormalizedInstant {
    pub fn new(utc: DateTime<Utc>, resolution: ZoneResolution) -> Self {
        let local = utc.with_timezone(&resolution.tz());
        Self {
            utc,
            local,
            resolution,
        }
    }

    pub fn julian_day(&self) -> f64 {
        julian_day(self.utc)
    }

    pub fn zone_id(&self) -> &'static str {
        self.resolution.zone_id()
    }

    pub fn local_iso(&self) -> String {
        self.local.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    pub fn utc_iso(&self) -> String {
        self.utc.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

fn parse_naive(input: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}

fn parse_with_offset(input: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(input).ok().or_else(|| {
        OFFSET_FORMATS
            .iter()
            .find_map(|fmt| DateTime::parse_from_str(input, fmt).ok())
    })
}

/// Convert a client birth timestamp to UTC.
///
/// `tz_offset_minutes` is minutes east of UTC and the conversion is
/// `UTC = local - offset`. A timestamp that carries its own offset (`Z`,
/// `+05:30`) is already absolute and the separate offset is ignored.
pub fn parse_chart_instant(
    datetime_iso: &str,
    tz_offset_minutes: i32,
) -> Result<DateTime<Utc>, TimeError> {
    let input = datetime_iso.trim();
    if input.is_empty() {
        return Err(TimeError::MissingTimestamp);
    }

    if let Some(dt) = parse_with_offset(input) {
        log::debug!("Timestamp '{}' carries its own offset; ignoring tzOffsetMinutes", input);
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = parse_naive(input).ok_or_else(|| TimeError::InvalidTimestamp {
        input: input.to_string(),
    })?;

    if tz_offset_minutes.abs() > MAX_OFFSET_MINUTES {
        return Err(TimeError::OffsetOutOfRange {
            minutes: tz_offset_minutes,
        });
    }
    let offset = FixedOffset::east_opt(tz_offset_minutes * 60).ok_or(TimeError::OffsetOutOfRange {
        minutes: tz_offset_minutes,
    })?;

    offset
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| TimeError::InvalidTimestamp {
            input: input.to_string(),
        })
}

/// UTC instant of a wall-clock time in `tz`. Times skipped by a DST jump
/// resolve to the first valid instant after the gap.
pub fn local_to_utc(naive: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    match tz.from_local_datetime(&naive).earliest() {
        Some(dt) => dt.with_timezone(&Utc),
        None => {
            let shifted = naive + chrono::Duration::hours(1);
            tz.from_local_datetime(&shifted)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|| Utc.from_utc_datetime(&naive))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::zone::FallbackReason;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_offset_is_subtracted() {
        // 10:30 at UTC+02:00 is 08:30 UTC
        let dt = parse_chart_instant("1990-06-15T10:30:00", 120).unwrap();
        assert_eq!(dt, utc(1990, 6, 15, 8, 30, 0));

        // 22:00 at UTC-05:00 is 03:00 UTC the next day
        let dt = parse_chart_instant("1990-06-15T22:00", -300).unwrap();
        assert_eq!(dt, utc(1990, 6, 16, 3, 0, 0));
    }

    #[test]
    fn test_embedded_offset_is_authoritative() {
        let dt = parse_chart_instant("1990-06-15T10:30:00+05:30", 120).unwrap();
        assert_eq!(dt, utc(1990, 6, 15, 5, 0, 0));
        let dt = parse_chart_instant("1990-06-15T10:30:00Z", -300).unwrap();
        assert_eq!(dt, utc(1990, 6, 15, 10, 30, 0));
    }

    #[test]
    fn test_compact_offsets_and_space_separator() {
        let dt = parse_chart_instant("1990-06-15T10:30:00+0530", 120).unwrap();
        assert_eq!(dt, utc(1990, 6, 15, 5, 0, 0));
        let dt = parse_chart_instant("1990-06-15T10:30-0400", 0).unwrap();
        assert_eq!(dt, utc(1990, 6, 15, 14, 30, 0));
        let dt = parse_chart_instant("1990-06-15 10:30:00", 120).unwrap();
        assert_eq!(dt, utc(1990, 6, 15, 8, 30, 0));
        let dt = parse_chart_instant("1990-06-15 10:30+02:00", 0).unwrap();
        assert_eq!(dt, utc(1990, 6, 15, 8, 30, 0));
    }

    #[test]
    fn test_date_only_and_fractional_seconds() {
        assert_eq!(parse_chart_instant("2000-01-01", 0).unwrap(), utc(2000, 1, 1, 0, 0, 0));
        let dt = parse_chart_instant("2000-01-01T12:00:00.250", 0).unwrap();
        assert_eq!(dt.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_malformed_timestamps() {
        assert!(matches!(parse_chart_instant("", 0), Err(TimeError::MissingTimestamp)));
        assert!(matches!(
            parse_chart_instant("yesterday at noon", 0),
            Err(TimeError::InvalidTimestamp { .. })
        ));
        assert!(matches!(
            parse_chart_instant("2001-02-30T10:00:00", 0),
            Err(TimeError::InvalidTimestamp { .. })
        ));
        assert!(matches!(
            parse_chart_instant("2001-02-03T10:00:00", 24 * 60),
            Err(TimeError::OffsetOutOfRange { minutes: 1440 })
        ));
    }

    #[test]
    fn test_normalized_instant_display() {
        let res = ZoneResolution::Resolved {
            tz: chrono_tz::Asia::Tokyo,
        };
        let inst = NormalizedInstant::new(utc(2024, 1, 1, 0, 0, 0), res);
        assert_eq!(inst.zone_id(), "Asia/Tokyo");
        assert_eq!(inst.local_iso(), "2024-01-01T09:00:00+09:00");
        assert_eq!(inst.utc_iso(), "2024-01-01T00:00:00Z");

        let fallback = ZoneResolution::Fallback {
            reason: FallbackReason::NoHint,
        };
        let inst = NormalizedInstant::new(utc(2024, 1, 1, 0, 0, 0), fallback);
        assert_eq!(inst.zone_id(), "UTC");
        assert_eq!(inst.local_iso(), inst.utc_iso());
    }

    #[test]
    fn test_local_to_utc_across_dst_gap() {
        // 02:30 on 2024-03-10 does not exist in New York
        let naive = NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();
        let dt = local_to_utc(naive, chrono_tz::America::New_York);
        assert_eq!(dt, utc(2024, 3, 10, 7, 30, 0));
    }
}
