use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::classifier::{ChartPlacement, Classifier};
use crate::ephemeris::GeoLocation;
use crate::error::AstroError;
use crate::resolver::PositionResolver;
use crate::time::parse_chart_instant;
use crate::western::ChartPoint;

/// Birth data as posted by the chart form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    #[serde(rename = "datetimeISO")]
    pub datetime_iso: String,
    /// Minutes east of UTC
    #[serde(rename = "tzOffsetMinutes")]
    pub tz_offset_minutes: i32,
    pub latitude: f64,
    pub longitude: f64,
}

/// Placements keyed by point name, serialized in chart order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Chart {
    entries: Vec<(ChartPoint, ChartPlacement)>,
}

impl Chart {
    pub fn push(&mut self, point: ChartPoint, placement: ChartPlacement) {
        self.entries.push((point, placement));
    }

    pub fn iter(&self) -> impl Iterator<Item = &(ChartPoint, ChartPlacement)> {
        self.entries.iter()
    }
}

impl Serialize for Chart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (point, placement) in &self.entries {
            map.serialize_entry(point.name(), placement)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartReport {
    pub chart: Chart,
    pub houses: [f64; 12],
}

pub fn chart_report(
    resolver: &PositionResolver,
    classifier: &Classifier,
    request: &ChartRequest,
) -> Result<ChartReport, AstroError> {
    let location = GeoLocation {
        lat: request.latitude,
        lon: request.longitude,
    };
    if !location.is_valid() {
        return Err(AstroError::InvalidInput(format!(
            "latitude/longitude out of range: ({}, {})",
            request.latitude, request.longitude
        )));
    }

    let utc = parse_chart_instant(&request.datetime_iso, request.tz_offset_minutes)?;
    let positions = resolver.chart_positions(utc, location)?;
    log::debug!(
        "Chart for {} at ({:.4}, {:.4})",
        utc.to_rfc3339(),
        location.lat,
        location.lon
    );

    let mut chart = Chart::default();
    for (body, lon) in &positions.bodies {
        chart.push(ChartPoint::Planet(*body), classifier.chart_placement((*body).into(), *lon));
    }
    chart.push(
        ChartPoint::Ascendant,
        classifier.chart_placement(ChartPoint::Ascendant, positions.houses.ascendant),
    );

    Ok(ChartReport {
        chart,
        houses: positions.houses.cusps,
    })
}
