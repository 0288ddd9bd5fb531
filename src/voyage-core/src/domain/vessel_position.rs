use crate::{CoordinateValidationError, validate_coordinate};
use chrono::{DateTime, Utc};
use marine_sources_rs::AisRecord;
use serde::Serialize;
use std::fmt::Display;

/// Maritime Mobile Service Identity, the vessel identifier used in AIS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Mmsi(i32);

impl Mmsi {
    pub fn new(value: i32) -> Mmsi {
        Mmsi(value)
    }

    pub fn into_inner(self) -> i32 {
        self.0
    }
}

impl Display for Mmsi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A validated vessel position report.
#[derive(Debug, Clone, PartialEq)]
pub struct VesselPosition {
    pub mmsi: Mmsi,
    pub timestamp: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    /// Speed over ground in knots.
    pub speed: Option<f64>,
    pub course_over_ground: Option<f64>,
    pub heading: Option<f64>,
    pub vessel_name: Option<String>,
    pub call_sign: Option<String>,
}

impl TryFrom<AisRecord> for VesselPosition {
    type Error = CoordinateValidationError;

    fn try_from(value: AisRecord) -> Result<Self, Self::Error> {
        let AisRecord {
            call_sign,
            course_over_ground,
            heading,
            latitude,
            longitude,
            mmsi,
            speed_over_ground,
            timestamp,
            vessel_name,
        } = value;

        let (latitude, longitude) = validate_coordinate(latitude, longitude)?;

        Ok(VesselPosition {
            mmsi: Mmsi(mmsi),
            timestamp,
            latitude,
            longitude,
            speed: speed_over_ground,
            course_over_ground,
            heading,
            vessel_name,
            call_sign,
        })
    }
}
