use chrono::{TimeZone, Utc};
use moonchart_core::ephemeris::MeanMotionEphemeris;
use moonchart_core::lunar::PhaseName;
use moonchart_core::report::{CalendarQuery, ChartRequest, ZoneHints};
use moonchart_core::time::ZoneLocator;
use moonchart_core::western::sign_from_longitude;
use moonchart_core::{AstroError, AstroService, Classifier};
use std::sync::Arc;

struct FixedLocator(Option<&'static str>);

impl ZoneLocator for FixedLocator {
    fn locate(&self, _lat: f64, _lon: f64) -> Option<String> {
        self.0.map(str::to_string)
    }
}

fn service(zone: Option<&'static str>) -> AstroService {
    AstroService::new(
        Arc::new(MeanMotionEphemeris::new()),
        Arc::new(FixedLocator(zone)),
        Classifier::default(),
    )
}

fn reference_request() -> ChartRequest {
    ChartRequest {
        datetime_iso: "1990-06-15T10:30:00".to_string(),
        tz_offset_minutes: 120,
        latitude: 48.8566,
        longitude: 2.3522,
    }
}

#[test]
fn test_chart_has_all_points_and_houses() {
    let report = service(None).chart(&reference_request()).unwrap();

    let names: Vec<&str> = report.chart.iter().map(|(p, _)| p.name()).collect();
    assert_eq!(
        names,
        vec![
            "Sun", "Moon", "Mercury", "Venus", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune",
            "Pluto", "Ascendant"
        ]
    );
    assert_eq!(report.houses.len(), 12);
    assert!(report.houses.iter().all(|c| (0.0..360.0).contains(c)));

    for (point, placement) in report.chart.iter() {
        let (sign, _) = sign_from_longitude(placement.longitude);
        assert_eq!(placement.sign, sign, "{} sign disagrees with longitude", point);
        assert!((0.0..=30.0).contains(&placement.degree));
        assert!(placement.planet_meaning.is_some());
    }
}

#[test]
fn test_chart_serializes_in_body_order() {
    let report = service(None).chart(&reference_request()).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    let sun = json.find("\"Sun\"").unwrap();
    let pluto = json.find("\"Pluto\"").unwrap();
    let asc = json.find("\"Ascendant\"").unwrap();
    assert!(sun < pluto && pluto < asc);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["houses"].as_array().unwrap().len(), 12);
    assert!(value["chart"]["Moon"]["astrology_details"]["ruling_planet"].is_string());
}

#[test]
fn test_offset_and_embedded_offset_agree() {
    let svc = service(None);
    let a = svc.chart(&reference_request()).unwrap();
    let b = svc
        .chart(&ChartRequest {
            datetime_iso: "1990-06-15T08:30:00Z".to_string(),
            tz_offset_minutes: 0,
            ..reference_request()
        })
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_chart_rejects_bad_input() {
    let svc = service(None);

    let err = svc
        .chart(&ChartRequest {
            datetime_iso: "not a date".to_string(),
            ..reference_request()
        })
        .unwrap_err();
    assert!(matches!(err, AstroError::Time(_)));
    assert!(err.is_client_error());

    let err = svc
        .chart(&ChartRequest {
            latitude: 95.0,
            ..reference_request()
        })
        .unwrap_err();
    assert!(matches!(err, AstroError::InvalidInput(_)));
}

#[test]
fn test_moon_report_falls_back_to_utc_for_unknown_zone() {
    let now = Utc.with_ymd_and_hms(2024, 4, 8, 18, 0, 0).unwrap();
    let hints = ZoneHints {
        timezone_name: Some("Not/AZone".to_string()),
        ..ZoneHints::default()
    };
    let report = service(Some("Europe/Paris")).moon_phase_at(&hints, now).unwrap();
    assert_eq!(report.timezone, "UTC");
    assert_eq!(report.datetime, "2024-04-08T18:00:00Z");
    assert_eq!(report.utc_datetime, "2024-04-08T18:00:00Z");
}

#[test]
fn test_moon_report_uses_located_zone() {
    let now = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
    let hints = ZoneHints {
        latitude: Some(48.8566),
        longitude: Some(2.3522),
        timezone_name: None,
    };
    let report = service(Some("Europe/Paris")).moon_phase_at(&hints, now).unwrap();
    assert_eq!(report.timezone, "Europe/Paris");
    assert_eq!(report.datetime, "2024-07-01T14:00:00+02:00");
    assert_eq!(report.utc_datetime, "2024-07-01T12:00:00Z");

    let phase = &report.moon_phase;
    assert_eq!(PhaseName::from_angle(phase.phase_angle), phase.phase_name);
    assert!((0.0..=100.0).contains(&phase.illumination));
}

#[test]
fn test_calendar_covers_whole_month_and_cycles_through_phases() {
    let query = CalendarQuery {
        year: 2024,
        month: 2,
        timezone_name: Some("America/New_York".to_string()),
        ..CalendarQuery::default()
    };
    let report = service(None).moon_calendar(&query).unwrap();
    assert_eq!(report.timezone, "America/New_York");
    assert_eq!(report.days.len(), 29);
    assert_eq!(report.days[0].date, "2024-02-01");
    assert_eq!(report.days[28].day, 29);

    // A 29-day month sees every phase at least once.
    for phase in PhaseName::ALL {
        assert!(
            report.days.iter().any(|d| d.phase_name == phase),
            "missing {}",
            phase
        );
    }
}

#[test]
fn test_calendar_rejects_bad_month() {
    let query = CalendarQuery {
        year: 2024,
        month: 13,
        ..CalendarQuery::default()
    };
    let err = service(None).moon_calendar(&query).unwrap_err();
    assert!(err.is_client_error());
}
