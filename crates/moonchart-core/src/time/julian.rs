use chrono::{DateTime, Datelike, Timelike, Utc};

/// Julian Day of 2000-01-01 12:00 UT.
pub const J2000: f64 = 2_451_545.0;

/// A UTC calendar instant with the time of day folded into a fractional hour,
/// the shape `swe_julday` expects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcCalendar {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: f64,
}

impl From<DateTime<Utc>> for UtcCalendar {
    fn from(dt: DateTime<Utc>) -> Self {
        let hour = dt.hour() as f64
            + dt.minute() as f64 / 60.0
            + (dt.second() as f64 + dt.nanosecond() as f64 / 1e9) / 3600.0;
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour,
        }
    }
}

impl UtcCalendar {
    pub fn julian_day(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64 + self.hour / 24.0)
    }
}

/// Gregorian calendar date (fractional day) to Julian Day, Meeus ch. 7.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Julian Day (UT) of a UTC instant.
pub fn julian_day(dt: DateTime<Utc>) -> f64 {
    UtcCalendar::from(dt).julian_day()
}
