//! Month view: one phase and Moon sign per day, sampled at local noon.

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::classifier::Classifier;
use crate::error::AstroError;
use crate::lunar::PhaseName;
use crate::report::moon::ZoneHints;
use crate::resolver::PositionResolver;
use crate::time::{local_to_utc, TimeError, ZoneLocator};
use crate::western::{Element, Modality, ZodiacSign};

const MIN_YEAR: i32 = 1800;
const MAX_YEAR: i32 = 2399;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarQuery {
    pub year: i32,
    pub month: u32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone_name: Option<String>,
}

impl CalendarQuery {
    pub fn hints(&self) -> ZoneHints {
        ZoneHints {
            latitude: self.latitude,
            longitude: self.longitude,
            timezone_name: self.timezone_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub day: u32,
    pub date: String,
    pub phase_name: PhaseName,
    pub emoji: String,
    pub illumination: f64,
    pub moon_sign: ZodiacSign,
    pub degree: f64,
    pub element: Element,
    pub modality: Modality,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarReport {
    pub year: i32,
    pub month: u32,
    pub timezone: String,
    pub days: Vec<CalendarDay>,
}

fn month_days(year: i32, month: u32) -> Result<Vec<NaiveDate>, TimeError> {
    let invalid = || TimeError::InvalidMonth { year, month };
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(invalid());
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    Ok(first
        .iter_days()
        .take_while(|d| d.month() == month)
        .collect())
}

pub fn calendar_report(
    resolver: &PositionResolver,
    classifier: &Classifier,
    locator: &dyn ZoneLocator,
    query: &CalendarQuery,
) -> Result<CalendarReport, AstroError> {
    let days = month_days(query.year, query.month)?;
    let resolution = query.hints().resolve(locator);
    let tz = resolution.tz();
    let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN);

    let days = days
        .into_iter()
        .map(|date| {
            let utc = local_to_utc(date.and_time(noon), tz);
            let (sun, moon) = resolver.luminaries(utc)?;
            let phase = classifier.moon_phase(sun, moon);
            let zodiac = classifier.zodiac(moon);
            Ok(CalendarDay {
                day: date.day(),
                date: date.format("%Y-%m-%d").to_string(),
                phase_name: phase.phase_name,
                emoji: phase.emoji,
                illumination: phase.illumination,
                moon_sign: zodiac.sign,
                degree: zodiac.degree,
                element: zodiac.element,
                modality: zodiac.modality,
            })
        })
        .collect::<Result<Vec<_>, AstroError>>()?;

    Ok(CalendarReport {
        year: query.year,
        month: query.month,
        timezone: resolution.zone_id().to_string(),
        days,
    })
}
